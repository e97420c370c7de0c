use core::num::{NonZeroU32, NonZeroU64, NonZeroUsize};

/// Opaque value stored by the deque.
///
/// The deque never looks inside a handle. It only copies it in and out and writes [`Handle::NULL`]
/// into every slot it vacates, so a removed handle is not kept alive by a stale copy in the buffer.
///
/// Handles are expected to be pointer-sized: an index into an external arena, a raw address or a tagged id.
/// Who owns the referenced object and when it is freed is up to the caller.
pub trait Handle: Copy {
    /// Value written into vacant slots.
    const NULL: Self;
}

macro_rules! impl_handle {
    ($($t:ty => $null:expr),* $(,)?) => {
        $(
            impl Handle for $t {
                const NULL: Self = $null;
            }
        )*
    };
}

impl_handle! {
    usize => 0,
    isize => 0,
    u64 => 0,
    i64 => 0,
    u32 => 0,
    Option<NonZeroUsize> => None,
    Option<NonZeroU64> => None,
    Option<NonZeroU32> => None,
}
