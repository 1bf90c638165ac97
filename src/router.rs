//! Callback router for non-discovery attribute traffic
//!
//! Read responses, write responses, and handle-value pushes share the event
//! path with discovery but are unrelated to discovery state. The router
//! holds at most one registered handler per category and invokes it
//! synchronously from the dispatcher; an unregistered category silently
//! drops the event. Within a category, invocation order matches arrival
//! order.

use crate::event::{HandleValueEvent, ReadResponse, WriteResponse};

/// Per-category consumer callbacks for attribute traffic
#[derive(Default)]
pub struct CallbackRouter<'cb> {
    read: Option<&'cb mut dyn FnMut(&ReadResponse)>,
    write: Option<&'cb mut dyn FnMut(&WriteResponse)>,
    handle_value: Option<&'cb mut dyn FnMut(&HandleValueEvent)>,
}

impl<'cb> CallbackRouter<'cb> {
    /// Create a router with no registered handlers
    #[must_use]
    pub const fn new() -> Self {
        Self {
            read: None,
            write: None,
            handle_value: None,
        }
    }

    /// Register the handler for attribute read responses, replacing any
    /// previous one
    pub fn set_read_handler(&mut self, handler: &'cb mut dyn FnMut(&ReadResponse)) {
        self.read = Some(handler);
    }

    /// Unregister the read response handler
    pub fn clear_read_handler(&mut self) {
        self.read = None;
    }

    /// Register the handler for attribute write responses, replacing any
    /// previous one
    pub fn set_write_handler(&mut self, handler: &'cb mut dyn FnMut(&WriteResponse)) {
        self.write = Some(handler);
    }

    /// Unregister the write response handler
    pub fn clear_write_handler(&mut self) {
        self.write = None;
    }

    /// Register the handler for handle-value notifications and indications,
    /// replacing any previous one
    pub fn set_handle_value_handler(&mut self, handler: &'cb mut dyn FnMut(&HandleValueEvent)) {
        self.handle_value = Some(handler);
    }

    /// Unregister the handle-value handler
    pub fn clear_handle_value_handler(&mut self) {
        self.handle_value = None;
    }

    /// Forward a read response to the registered handler, if any
    pub fn dispatch_read(&mut self, response: &ReadResponse) {
        if let Some(handler) = self.read.as_mut() {
            handler(response);
        }
    }

    /// Forward a write response to the registered handler, if any
    pub fn dispatch_write(&mut self, response: &WriteResponse) {
        if let Some(handler) = self.write.as_mut() {
            handler(response);
        }
    }

    /// Forward a handle-value push to the registered handler, if any
    pub fn dispatch_handle_value(&mut self, event: &HandleValueEvent) {
        if let Some(handler) = self.handle_value.as_mut() {
            handler(event);
        }
    }
}
