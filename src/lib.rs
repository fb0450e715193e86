//! Duke library - task list model, save format and command-line front end

pub mod cli;
pub mod storage;
pub mod task;
