/// Absolute lower bound of ring capacity.
///
/// Neither the initial capacity nor the shrink floor can go below this value.
pub const MIN_CAPACITY: usize = 16;

const DEFAULT_MIN_CAPACITY_BITS: u32 = MIN_CAPACITY.trailing_zeros();

/// Largest power of two representable in `usize`.
const MAX_CAPACITY: usize = 1 << (usize::BITS - 1);

/// Construction parameters of a deque.
///
/// All values are normalized on read, so any combination is valid:
/// capacities are rounded up to a power of two and raised to [`MIN_CAPACITY`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    initial_capacity: usize,
    min_capacity_bits: u32,
    spin: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: MIN_CAPACITY,
            min_capacity_bits: DEFAULT_MIN_CAPACITY_BITS,
            spin: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots allocated up front.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Shrink floor as a power of two exponent, see [`RingDeque::set_min_capacity`](crate::RingDeque::set_min_capacity).
    ///
    /// A producer that knows its load fluctuates a lot may set a high floor to avoid reallocation churn.
    pub fn with_min_capacity_bits(mut self, bits: u32) -> Self {
        self.min_capacity_bits = bits;
        self
    }

    /// Whether blocking pops spin for a short while before parking the thread.
    ///
    /// Ignored by the single-threaded deque.
    pub fn with_spin(mut self, spin: bool) -> Self {
        self.spin = spin;
        self
    }

    /// Initial capacity, never less than [`Self::min_capacity`].
    pub fn initial_capacity(&self) -> usize {
        normalize_capacity(self.initial_capacity).max(self.min_capacity())
    }

    pub fn min_capacity(&self) -> usize {
        min_capacity_from_bits(self.min_capacity_bits)
    }

    pub fn spin(&self) -> bool {
        self.spin
    }
}

/// Rounds `capacity` up to a power of two not less than [`MIN_CAPACITY`].
pub(crate) fn normalize_capacity(capacity: usize) -> usize {
    capacity.max(MIN_CAPACITY).checked_next_power_of_two().unwrap_or(MAX_CAPACITY)
}

/// `max(2^bits, MIN_CAPACITY)`, saturating at the largest power of two.
pub(crate) fn min_capacity_from_bits(bits: u32) -> usize {
    1usize.checked_shl(bits).unwrap_or(MAX_CAPACITY).max(MIN_CAPACITY)
}
