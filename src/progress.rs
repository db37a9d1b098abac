//! Progress reporting for long running GDAL operations.
//!
//! GDAL reports progress through a `GDALProgressFunc` plus an opaque context
//! pointer. [`Progress`] carries that pair. A Rust closure is reached through
//! [`progress_trampoline`], which GDAL calls once per tick:
//!
//! ```rust, no_run
//! use gdal_glue::progress::Progress;
//!
//! let mut progress = Progress::new(|complete, message| {
//!     println!("{:>3.0}% {message}", complete * 100.0);
//!     true // keep going, `false` cancels
//! });
//! assert!(progress.report(0.5, "halfway"));
//! ```

use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::fmt::{Debug, Formatter};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use gdal_glue_sys::GDALProgressFunc;
use libc::{c_char, c_double, c_int, c_void};
use log::{debug, error};

/// Signature of a progress closure: completion in `0.0..=1.0`, an optional
/// message (empty when GDAL passes none), `true` to continue.
pub type ProgressCallback<'a> = dyn FnMut(f64, &str) -> bool + 'a;

// The inner box makes the trait object reachable through a thin pointer, the
// outer one gives it an address that does not move with `Progress`.
type PinnedProgressCallback<'a> = Box<Box<ProgressCallback<'a>>>;

/// `GDALProgressFunc` that forwards to the closure behind `progress_arg`.
///
/// `progress_arg` must be NULL or point to a `Box<dyn FnMut(f64, &str) -> bool>`
/// that outlives the call. A NULL context cancels. A NULL `message` is passed to
/// the closure as `""`. A panic in the closure is logged and cancels the
/// operation, it never unwinds into GDAL.
///
/// # Safety
/// `progress_arg` must satisfy the contract above.
pub unsafe extern "C" fn progress_trampoline(
    complete: c_double,
    message: *const c_char,
    progress_arg: *mut c_void,
) -> c_int {
    if progress_arg.is_null() {
        return 0;
    }
    let callback: &mut Box<ProgressCallback<'_>> = &mut *(progress_arg as *mut Box<_>);

    let message = if message.is_null() {
        Cow::Borrowed("")
    } else {
        CStr::from_ptr(message).to_string_lossy()
    };

    match panic::catch_unwind(AssertUnwindSafe(|| callback(complete, &message))) {
        Ok(true) => 1,
        Ok(false) => {
            debug!("progress callback cancelled the operation at {complete:.3}");
            0
        }
        Err(_) => {
            error!("progress callback panicked at {complete:.3}, cancelling the operation");
            0
        }
    }
}

enum Context<'a> {
    Empty,
    Closure(PinnedProgressCallback<'a>),
    Scaled {
        data: *mut c_void,
        _parent: Box<Progress<'a>>,
    },
}

/// A progress function and the context it is called with.
///
/// Operations taking a `&mut Progress` hand both to GDAL for the duration of
/// the call.
pub struct Progress<'a> {
    func: GDALProgressFunc,
    context: Context<'a>,
}

impl<'a> Progress<'a> {
    /// No reporting. GDAL substitutes its dummy function.
    pub fn none() -> Self {
        Progress {
            func: None,
            context: Context::Empty,
        }
    }

    /// `GDALDummyProgress`, always continues.
    pub fn dummy() -> Self {
        Progress {
            func: Some(gdal_glue_sys::GDALDummyProgress),
            context: Context::Empty,
        }
    }

    /// `GDALTermProgress`, the `0...10...20...` bar the command line tools print.
    pub fn terminal() -> Self {
        Progress {
            func: Some(gdal_glue_sys::GDALTermProgress),
            context: Context::Empty,
        }
    }

    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(f64, &str) -> bool + 'a,
    {
        let callback: PinnedProgressCallback<'a> = Box::new(Box::new(callback));
        Progress {
            func: Some(progress_trampoline),
            context: Context::Closure(callback),
        }
    }

    /// Maps `0.0..=1.0` onto `min..=max` of `self`, for running one step of a
    /// larger job.
    pub fn scaled(self, min: f64, max: f64) -> Progress<'a> {
        let mut parent = Box::new(self);
        let (parent_func, parent_data) = parent.as_raw();
        let data = unsafe {
            gdal_glue_sys::GDALCreateScaledProgress(min, max, parent_func, parent_data)
        };
        // GDAL returns NULL when the parent does not report anything
        let func = if data.is_null() {
            None
        } else {
            Some(gdal_glue_sys::GDALScaledProgress as unsafe extern "C" fn(_, _, _) -> _)
        };
        Progress {
            func,
            context: Context::Scaled {
                data,
                _parent: parent,
            },
        }
    }

    /// The pair to hand to a GDAL function taking `pfnProgress, pProgressData`.
    ///
    /// The pointers stay valid while `self` is alive and not moved out of its box.
    pub fn as_raw(&mut self) -> (GDALProgressFunc, *mut c_void) {
        let data = match &mut self.context {
            Context::Empty => ptr::null_mut(),
            Context::Closure(callback) => {
                let callback_ref: &mut Box<ProgressCallback<'a>> = callback.as_mut();
                callback_ref as *mut _ as *mut c_void
            }
            Context::Scaled { data, .. } => *data,
        };
        (self.func, data)
    }

    /// Reports a tick through the native function, as GDAL would.
    ///
    /// Returns `false` if the receiver asked to cancel.
    pub fn report(&mut self, complete: f64, message: &str) -> bool {
        let (func, data) = self.as_raw();
        let Some(func) = func else {
            return true;
        };
        let c_message = CString::new(message.replace('\0', "")).unwrap_or_default();
        unsafe { func(complete, c_message.as_ptr(), data) != 0 }
    }

    pub fn is_none(&self) -> bool {
        self.func.is_none()
    }
}

impl Default for Progress<'_> {
    fn default() -> Self {
        Self::none()
    }
}

impl Drop for Progress<'_> {
    fn drop(&mut self) {
        if let Context::Scaled { data, .. } = self.context {
            if !data.is_null() {
                unsafe { gdal_glue_sys::GDALDestroyScaledProgress(data) };
            }
        }
    }
}

impl Debug for Progress<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match self.context {
            Context::Empty if self.func.is_none() => "none",
            Context::Empty => "native",
            Context::Closure(_) => "closure",
            Context::Scaled { .. } => "scaled",
        };
        f.debug_struct("Progress").field("kind", &kind).finish()
    }
}
