//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod bigmap_service;
pub mod map_request;
mod metadata;

pub use self::bigmap_service::BigmapService;
pub use self::map_request::{parse_query, MapDefaults, MapRequest};
