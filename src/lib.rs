#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(unused_mut)]
#![allow(dead_code)]
#![allow(unused_doc_comments)]

pub mod config;
pub mod conn_manager;
pub mod logging;
pub mod status;
pub mod ui;
