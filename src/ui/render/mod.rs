mod all;
mod chips;
mod create_project;
mod footer;
mod header;
mod log;
mod project_detail;
mod project_list;

use self::log::log;
use super::*;
use chips::chips;
use create_project::create_project;
use footer::footer;
use header::header;
use project_detail::project_detail;
use project_list::project_list;

pub use all::all as render;
