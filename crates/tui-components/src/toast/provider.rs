//! Scoped ownership of a toast region plus cloneable handles into it.
//!
//! A [`ToastProvider`] is the init/teardown scope: it owns the region and
//! tears it down when dropped. Code that only needs to raise toasts gets a
//! [`ToastHandle`], which holds a weak reference and can be moved into
//! callbacks freely.

use super::config::ToastConfig;
use super::entity::{ToastId, ToastSpec};
use super::region::ToastRegion;
use super::surface::ToastTransition;
use crate::clock::Clock;
use crate::error::{ToastError, ToastResult};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

/// Owner of a [`ToastRegion`].
#[derive(Debug)]
pub struct ToastProvider {
    region: Rc<RefCell<ToastRegion>>,
}

impl ToastProvider {
    /// Create a provider on the system clock.
    pub fn new(config: ToastConfig) -> Self {
        Self::from_region(ToastRegion::new(config))
    }

    /// Create a provider on the given clock.
    pub fn with_clock(config: ToastConfig, clock: impl Clock + 'static) -> Self {
        Self::from_region(ToastRegion::with_clock(config, clock))
    }

    /// Take ownership of an existing region.
    pub fn from_region(region: ToastRegion) -> Self {
        Self {
            region: Rc::new(RefCell::new(region)),
        }
    }

    /// A handle that can raise and close toasts while this provider lives.
    pub fn handle(&self) -> ToastHandle {
        ToastHandle {
            region: Rc::downgrade(&self.region),
        }
    }

    /// Borrow the region.
    pub fn region(&self) -> Ref<'_, ToastRegion> {
        self.region.borrow()
    }

    /// Borrow the region mutably.
    pub fn region_mut(&self) -> RefMut<'_, ToastRegion> {
        self.region.borrow_mut()
    }

    /// Fire due timers.
    pub fn tick(&self) -> Vec<ToastTransition> {
        self.region.borrow_mut().tick()
    }

    /// Render the region.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut region = self.region.borrow_mut();
        (&mut *region).render(area, buf);
    }
}

impl Default for ToastProvider {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

/// Weak, cloneable access to a provider's region.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    region: Weak<RefCell<ToastRegion>>,
}

impl ToastHandle {
    /// Whether the provider is still alive.
    pub fn is_connected(&self) -> bool {
        self.region.strong_count() > 0
    }

    fn with_region<R>(&self, f: impl FnOnce(&mut ToastRegion) -> R) -> ToastResult<R> {
        let region = self.region.upgrade().ok_or(ToastError::RegionClosed)?;
        let mut region = region
            .try_borrow_mut()
            .map_err(|_| ToastError::RegionBusy)?;
        Ok(f(&mut region))
    }

    /// Raise a toast.
    pub fn try_show(&self, spec: ToastSpec) -> ToastResult<ToastId> {
        self.with_region(|region| region.create(spec))
    }

    /// Close a toast. `Ok(false)` when the id is unknown or already closing.
    pub fn try_close(&self, id: ToastId) -> ToastResult<bool> {
        self.with_region(|region| region.dismiss(id))
    }

    /// Close every toast immediately.
    pub fn try_close_all(&self) -> ToastResult<usize> {
        self.with_region(ToastRegion::dismiss_all)
    }

    /// Raise a toast.
    ///
    /// # Panics
    ///
    /// Panics if the [`ToastProvider`] has been dropped or its region is
    /// borrowed. Use [`Self::try_show`] to handle those cases.
    pub fn show(&self, spec: ToastSpec) -> ToastId {
        match self.try_show(spec) {
            Ok(id) => id,
            Err(err) => panic!("{err}"),
        }
    }

    /// Close a toast.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Self::show`].
    pub fn close(&self, id: ToastId) -> bool {
        match self.try_close(id) {
            Ok(closed) => closed,
            Err(err) => panic!("{err}"),
        }
    }

    /// Close every toast immediately.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Self::show`].
    pub fn close_all(&self) -> usize {
        match self.try_close_all() {
            Ok(count) => count,
            Err(err) => panic!("{err}"),
        }
    }
}
