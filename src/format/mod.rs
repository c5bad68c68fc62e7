// ============================================================================
// Format Module
// Display formatters for prices, magnitudes, amounts and timestamps
// ============================================================================

mod money;
mod price;
mod relative_time;
mod rendered;
mod unit;
mod window;

pub use money::{money_format, MoneyFormat};
pub use price::parse_price;
pub use relative_time::{format_time, timestamp_to_datetime, RelativeTime};
pub use rendered::Rendered;
pub use unit::{parse_with_unit, UnitKind};
pub use window::SIGNIFICANT_DIGITS;
