mod key_value;

pub use key_value::{FileStorage, KeyValueStorage, MemoryStorage, DATA_KEY, ITEMS_KEY};
