//! One module per subcommand.  Every handler has the shape
//! `execute(ctx: &Context, ...) -> Result<()>` and is dispatched by
//! `Commands::run`.

pub mod add;
pub mod completions;
pub mod delete;
pub mod generate;
pub mod get;
pub mod init;
pub mod list;
