//! Booking status classification.
//!
//! Bookings belong to the booking-creation subsystem; the capacity engine
//! only counts them. Counts are a point-in-time snapshot with no locking,
//! so they are advisory: two readers can both see a free seat.

/// Booking statuses that consume capacity. Matched case-sensitively.
pub const ACTIVE_BOOKING_STATUSES: &[&str] = &["PENDING", "RESERVED", "CONFIRMED"];
