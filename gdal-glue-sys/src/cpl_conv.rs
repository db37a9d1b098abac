use libc::{c_char, c_void};

extern "C" {
    pub fn CPLSetConfigOption(pszKey: *const c_char, pszValue: *const c_char);
    pub fn CPLGetConfigOption(pszKey: *const c_char, pszDefault: *const c_char) -> *const c_char;
    pub fn CPLSetThreadLocalConfigOption(pszKey: *const c_char, pszValue: *const c_char);
    pub fn CPLGetThreadLocalConfigOption(
        pszKey: *const c_char,
        pszDefault: *const c_char,
    ) -> *const c_char;

    /// `CPLFree` is a macro over this.
    pub fn VSIFree(p: *mut c_void);
}
