//! Foreign boundary to the native kernel library
//!
//! The library is an opaque, separately-built artifact reached over the
//! C ABI; every routine returns an integer status code from the
//! [`KernelStatus`] taxonomy. Calls are blocking and serialized by a
//! process-wide lock: the library owns a single device context, and a call
//! completes before the caller's next statement runs.
//!
//! With the `accel` cargo feature disabled the same functions are provided as
//! in-process software stand-ins with identical signatures, so the
//! accelerated backend remains portable and testable on machines without the
//! native library.

use std::fmt;

/// Result codes reported by the native kernel library
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KernelStatus {
    /// The routine completed
    Succeeded,
    /// Selecting the compute device failed
    SetDeviceFailed,
    /// Resetting the compute device failed
    DeviceResetFailed,
    /// Device memory allocation failed
    MallocFailed,
    /// Host/device memory transfer failed
    MemcpyFailed,
    /// The kernel launch itself failed
    KernelFailed,
    /// Waiting for the device to finish failed
    DeviceSynchronizeFailed,
    /// A status code outside the published taxonomy
    Unrecognized(i32),
}

impl KernelStatus {
    /// Decode the integer status a routine returned
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Succeeded,
            1 => Self::SetDeviceFailed,
            2 => Self::DeviceResetFailed,
            3 => Self::MallocFailed,
            4 => Self::MemcpyFailed,
            5 => Self::KernelFailed,
            6 => Self::DeviceSynchronizeFailed,
            other => Self::Unrecognized(other),
        }
    }

    /// Whether this status is a success
    pub fn succeeded(self) -> bool {
        self == Self::Succeeded
    }
}

impl fmt::Display for KernelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "succeeded"),
            Self::SetDeviceFailed => write!(f, "set-device failed"),
            Self::DeviceResetFailed => write!(f, "device-reset failed"),
            Self::MallocFailed => write!(f, "device allocation failed"),
            Self::MemcpyFailed => write!(f, "memory transfer failed"),
            Self::KernelFailed => write!(f, "kernel launch failed"),
            Self::DeviceSynchronizeFailed => write!(f, "device synchronize failed"),
            Self::Unrecognized(code) => write!(f, "unrecognized status code {code}"),
        }
    }
}

#[cfg(feature = "accel")]
mod native {
    use std::sync::Mutex;

    // The library owns one device context; calls must not interleave.
    static KERNEL_GATE: Mutex<()> = Mutex::new(());

    extern "C" {
        fn warmup() -> i32;

        fn single_precision_vector_addition(
            left: *const f32,
            right: *const f32,
            result: *mut f32,
            vector_length: i64,
        ) -> i32;

        fn double_precision_vector_addition(
            left: *const f64,
            right: *const f64,
            result: *mut f64,
            vector_length: i64,
        ) -> i32;
    }

    pub(crate) fn call_warmup() -> i32 {
        let _gate = KERNEL_GATE.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: the routine takes no arguments and touches no host memory.
        unsafe { warmup() }
    }

    pub(crate) fn call_add_f32(lhs: &[f32], rhs: &[f32], out: &mut [f32]) -> i32 {
        let _gate = KERNEL_GATE.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: the three slices have equal length (validated by the
        // caller) and `out` is exclusively borrowed for the duration of the
        // synchronous call.
        unsafe {
            single_precision_vector_addition(
                lhs.as_ptr(),
                rhs.as_ptr(),
                out.as_mut_ptr(),
                out.len() as i64,
            )
        }
    }

    pub(crate) fn call_add_f64(lhs: &[f64], rhs: &[f64], out: &mut [f64]) -> i32 {
        let _gate = KERNEL_GATE.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: as for `call_add_f32`.
        unsafe {
            double_precision_vector_addition(
                lhs.as_ptr(),
                rhs.as_ptr(),
                out.as_mut_ptr(),
                out.len() as i64,
            )
        }
    }
}

/// Warm the kernel library up (device selection, context creation)
///
/// The one entry point with no engine-specific arguments; useful to pay the
/// device initialization cost ahead of the first real operation.
pub(crate) fn warmup() -> KernelStatus {
    #[cfg(feature = "accel")]
    {
        KernelStatus::from_code(native::call_warmup())
    }
    #[cfg(not(feature = "accel"))]
    {
        KernelStatus::Succeeded
    }
}

/// Single-precision elementwise addition over real lanes
pub(crate) fn vector_add_f32(lhs: &[f32], rhs: &[f32], out: &mut [f32]) -> KernelStatus {
    debug_assert_eq!(lhs.len(), rhs.len());
    debug_assert_eq!(lhs.len(), out.len());

    #[cfg(feature = "accel")]
    {
        KernelStatus::from_code(native::call_add_f32(lhs, rhs, out))
    }
    #[cfg(not(feature = "accel"))]
    {
        for ((o, &a), &b) in out.iter_mut().zip(lhs).zip(rhs) {
            *o = a + b;
        }
        KernelStatus::Succeeded
    }
}

/// Double-precision elementwise addition over real lanes
pub(crate) fn vector_add_f64(lhs: &[f64], rhs: &[f64], out: &mut [f64]) -> KernelStatus {
    debug_assert_eq!(lhs.len(), rhs.len());
    debug_assert_eq!(lhs.len(), out.len());

    #[cfg(feature = "accel")]
    {
        KernelStatus::from_code(native::call_add_f64(lhs, rhs, out))
    }
    #[cfg(not(feature = "accel"))]
    {
        for ((o, &a), &b) in out.iter_mut().zip(lhs).zip(rhs) {
            *o = a + b;
        }
        KernelStatus::Succeeded
    }
}
