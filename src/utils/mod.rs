pub mod id;
pub mod validation;

pub use id::{format_ticket_id, parse_ticket_sequence, validate_prefix};
pub use validation::{require_choice, require_text};

use jiff::Zoned;
use jiff::civil::Date;

/// Today's calendar date in the local time zone
pub fn today() -> Date {
    Zoned::now().date()
}
