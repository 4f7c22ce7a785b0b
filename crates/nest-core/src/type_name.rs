//! Simple type names used as key prefixes

use std::borrow::Cow;

/// Get the unqualified name of `T`, without module paths.
///
/// Named types lose their generic arguments too: `alloc::vec::Vec<u8>`
/// becomes `Vec`, `my_app::models::User` becomes `User`.
///
/// Compound types keep their shape with every module path removed:
/// `(my_app::User, u8)` becomes `(User, u8)`, `[my_app::User; 3]` becomes
/// `[User; 3]`, `&my_app::User` becomes `&User` and `dyn core::fmt::Debug`
/// becomes `dyn Debug`.
#[must_use]
pub fn simple_type_name<T: ?Sized>() -> Cow<'static, str> {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);

    if is_path(base) {
        Cow::Borrowed(base.rsplit("::").next().unwrap_or(base))
    } else {
        Cow::Owned(strip_paths(full))
    }
}

fn is_path(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == ':')
}

/// Drop every `module::` qualifier, keeping the rest of the text
fn strip_paths(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut segment_start = 0;
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
        } else {
            out.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = out.len();
            }
        }
    }
    out
}
