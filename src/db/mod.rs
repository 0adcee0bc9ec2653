pub mod audit;
pub mod custom_values;
pub mod pool;
pub mod requests;
pub mod tags;
pub mod users;

pub use audit::{record_log, LogEntry};
pub use custom_values::{find_field_by_name, load_values, write_value, ValueOwner};
pub use pool::{create_pool, run_migrations};
pub use requests::{load_request_detail, load_request_details};
pub use tags::{load_tags, load_tags_for_items, set_item_tags};
pub use users::{ensure_admin, find_user, find_users};
