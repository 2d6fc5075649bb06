//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use bigmap_core::core::config::{ApplicationCfg, DEFAULT_CONFIG};
use bigmap_core::core::{parse_config, read_config, Config};
use bigmap_core::service::{parse_query, BigmapService};
use clap::ArgMatches;
use std::collections::HashMap;
use std::process;
use std::str::FromStr;

pub fn config_from_args(args: &ArgMatches) -> ApplicationCfg {
    let mut config: ApplicationCfg = if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        read_config(cfgpath).unwrap_or_else(|err| {
            println!("Error reading configuration - {} ", err);
            process::exit(1)
        })
    } else {
        parse_config(DEFAULT_CONFIG.to_string(), "").unwrap_or_else(|err| {
            println!("Error reading default configuration - {} ", err);
            process::exit(1)
        })
    };
    if let Some(bind) = args.value_of("bind") {
        config.webserver.bind = Some(bind.to_string());
    }
    if let Some(port) = args.value_of("port") {
        let port = u16::from_str(port).unwrap_or_else(|_| {
            println!("Invalid port number '{}'", port);
            process::exit(1)
        });
        config.webserver.port = Some(port);
    }
    config
}

pub fn service_from_args(config: &ApplicationCfg, _args: &ArgMatches) -> BigmapService {
    BigmapService::from_config(config).unwrap_or_else(|err| {
        println!("Error reading configuration - {} ", err);
        process::exit(1)
    })
}

/// Map query parameters of the `render` command
pub fn query_from_args(args: &ArgMatches) -> HashMap<String, String> {
    let mut params = parse_query(args.value_of("query").unwrap_or(""));
    if let Some(tileurl) = args.value_of("tileurl") {
        for argname in &["tileurl", "xmin", "xmax", "ymin", "ymax", "zoom"] {
            if params.contains_key(*argname) {
                warn!("Ignoring `{}` in `--query`, `--tileurl` is given", argname);
            }
        }
        params.insert("tileurl".to_string(), tileurl.to_string());
    }
    params
}

pub fn gen_config(_args: &ArgMatches) -> String {
    let toml = r#"
[webserver]
# Bind address. Use 0.0.0.0 to listen on all adresses.
bind = "127.0.0.1"
port = 8080
# Number of worker threads (Default: number of CPUs)
#threads = 4
# Cache-Control max-age of map pages in seconds
#cache_control_max_age = 300
"#;
    let mut config = BigmapService::gen_config();
    config.push_str(toml);
    config
}

#[test]
fn test_gen_config() {
    let args = ArgMatches::new();
    let toml = gen_config(&args);
    println!("{}", toml);
    assert_eq!(Some("# bigmap configuration"), toml.lines().next());

    let config: ApplicationCfg = parse_config(toml, "").unwrap();
    assert_eq!(config.webserver.port, Some(8080));
    let service = BigmapService::from_config(&config).unwrap();
    assert_eq!(service.defaults.scale, 256);
}

#[test]
fn test_config_from_args() {
    use clap::App;

    let args = App::new("test")
        .args_from_usage(
            "--bind=[IPADDRESS] 'Bind web server to this address'
             --port=[PORT] 'Bind web server to this port'",
        )
        .get_matches_from(vec!["", "--bind", "0.0.0.0", "--port", "9090"]);
    let config = config_from_args(&args);
    assert_eq!(config.webserver.bind, Some("0.0.0.0".to_string()));
    assert_eq!(config.webserver.port, Some(9090));
    assert_eq!(
        config.service.bigmap.baseurl,
        "http://tile.openstreetmap.org/!z/!x/!y.png"
    );

    let config = config_from_args(&ArgMatches::new());
    assert_eq!(config.webserver.port, Some(8080));
}

#[test]
fn test_query_from_args() {
    use clap::App;

    let app = App::new("test").args_from_usage(
        "--query=[QUERY] 'Map query'
         --tileurl=[URL] 'Tile image URL'",
    );
    let args = app
        .clone()
        .get_matches_from(vec!["", "--query", "xmin=1&xmax=3&zoom=4&scale=64"]);
    let params = query_from_args(&args);
    assert_eq!(params.get("xmin"), Some(&"1".to_string()));
    assert_eq!(params.get("scale"), Some(&"64".to_string()));
    assert_eq!(params.get("tileurl"), None);

    let args = app.get_matches_from(vec![
        "",
        "--query",
        "xmin=1&xmax=3&zoom=4&scale=64&tileurl=/1/1/1.png",
        "--tileurl",
        "http://tile.openstreetmap.org/17/39137/48460.png",
    ]);
    let params = query_from_args(&args);
    assert_eq!(
        params.get("tileurl"),
        Some(&"http://tile.openstreetmap.org/17/39137/48460.png".to_string())
    );
    let request = BigmapService::default().map_request(&params);
    assert_eq!(request.tile_box.xmin, 39136);
    assert_eq!(request.scale, 64);
}
