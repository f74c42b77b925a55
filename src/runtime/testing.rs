//! Shared helpers for runtime tests.

use crate::runtime::{Protocol, Transport};
use std::cell::RefCell;
use std::net::{TcpListener, TcpStream};
use std::rc::Rc;

/// A handler callback, as observed by [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Made,
    Data(Vec<u8>),
    Lost,
}

/// Handler that logs every callback into a shared list.
#[derive(Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
    /// Call `lose_connection` on this data callback (1-based).
    close_after: Option<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn closing_after(chunks: usize) -> Self {
        Self {
            close_after: Some(chunks),
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn chunks(&self) -> Vec<Vec<u8>> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Data(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &Event) -> usize {
        self.events.borrow().iter().filter(|e| *e == wanted).count()
    }
}

impl Protocol for Recorder {
    fn connection_made(&mut self, _transport: &mut dyn Transport) {
        self.events.borrow_mut().push(Event::Made);
    }

    fn data_received(&mut self, data: &mut [u8], transport: &mut dyn Transport) {
        self.events.borrow_mut().push(Event::Data(data.to_vec()));
        if self.close_after == Some(self.chunks().len()) {
            transport.lose_connection();
        }
    }

    fn connection_lost(&mut self) {
        self.events.borrow_mut().push(Event::Lost);
    }
}

/// A connected loopback pair: the accepted side as a non-blocking mio
/// stream, the client side as a blocking std stream.
pub fn loopback() -> (mio::net::TcpStream, TcpStream) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let client = TcpStream::connect(listener.local_addr().unwrap()).unwrap();
    let (accepted, _) = listener.accept().unwrap();
    accepted.set_nonblocking(true).unwrap();
    (mio::net::TcpStream::from_std(accepted), client)
}
