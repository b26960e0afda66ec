//! State Handles
//!
//! The dispatcher mutates state only through this seam, so the same
//! commands drive a `RefCell` in tests and a reactive signal in the UI.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

pub trait StateHandle<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    fn update(&self, f: impl FnOnce(&mut T));
}

impl<T> StateHandle<T> for RefCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut())
    }
}

impl<T, H: StateHandle<T> + ?Sized> StateHandle<T> for Rc<H> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        (**self).read(f)
    }

    fn update(&self, f: impl FnOnce(&mut T)) {
        (**self).update(f)
    }
}

impl<T, H: StateHandle<T> + ?Sized> StateHandle<T> for Arc<H> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        (**self).read(f)
    }

    fn update(&self, f: impl FnOnce(&mut T)) {
        (**self).update(f)
    }
}
