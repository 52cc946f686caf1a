mod commands;
mod handlers;

pub use commands::{Cli, Commands, WorksAction, WorksCommand};
pub use handlers::{
    handle_add, handle_delete, handle_get, handle_init, handle_list, handle_order, handle_stats,
    handle_update, handle_works_list, handle_works_order, handle_works_show,
};
