//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;

mod runtime_config;
mod server;

pub use crate::runtime_config::{config_from_args, gen_config, query_from_args, service_from_args};
pub use crate::server::{routes, webserver, AppState};
