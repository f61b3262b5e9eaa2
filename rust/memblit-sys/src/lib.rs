//! Raw FFI bindings to the platform C runtime's allocation and copy routines
#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use std::os::raw::c_void;

extern "C" {
    // ==================== Foreign allocator ====================
    pub fn malloc(size: usize) -> *mut c_void;
    pub fn free(ptr: *mut c_void);

    // ==================== Block copy routines ====================
    // memmove is documented overlap-safe; memcpy assumes disjoint ranges.
    // Both return dst; the return value is unused by this crate.
    pub fn memcpy(dst: *mut c_void, src: *const c_void, n: usize) -> *mut c_void;
    pub fn memmove(dst: *mut c_void, src: *const c_void, n: usize) -> *mut c_void;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malloc_free_roundtrip() {
        unsafe {
            let ptr = malloc(64);
            assert!(!ptr.is_null());
            free(ptr);
        }
    }

    #[test]
    fn memcpy_copies_disjoint_buffers() {
        let src = [7u8; 32];
        let mut dst = [0u8; 32];
        unsafe {
            memcpy(dst.as_mut_ptr() as *mut c_void, src.as_ptr() as *const c_void, 32);
        }
        assert_eq!(src, dst);
    }
}
