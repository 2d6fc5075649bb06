//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use bigmap_webserver as webserver;
use clap::{App, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use std::env;
use std::io::Write;
use std::process;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(rust_log)) => rust_log.as_str(),
        (loglevel, _) => match loglevel.unwrap_or("info") {
            "debug" => "debug,actix_server=info",
            loglevel => loglevel,
        },
    };
    builder.parse_filters(rust_log);

    builder.init();
}

/// Render a single map view to stdout
fn render(args: &ArgMatches<'_>) {
    let config = webserver::config_from_args(args);
    let service = webserver::service_from_args(&config, args);
    let request = service.map_request(&webserver::query_from_args(args));
    let output = match args.value_of("format").unwrap_or("html") {
        "json" => service
            .get_metadata(&request)
            .map(|json| json.to_string())
            .map_err(|e| e.to_string()),
        "html" => service.page_html(&request),
        format => Err(format!("Unknown output format '{}'", format)),
    };
    match output {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{}", e);
            process::exit(1)
        }
    }
}

fn main() {
    dotenv().ok();
    // http://kbknapp.github.io/clap-rs/clap/
    let mut app = App::new("bigmap")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("Big slippy map mosaics with a navigation panel")
        .subcommand(SubCommand::with_name("serve")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --bind=[IPADDRESS] 'Bind web server to this address (0.0.0.0 for all)'
                                              --port=[PORT] 'Bind web server to this port'
                                              --openbrowser=[true|false] 'Open map URL in browser (Default: false)'")
                        .about("Start web server and serve map pages"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"))
        .subcommand(SubCommand::with_name("render")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --query=[QUERY] 'Map query like xmin=1&xmax=2&ymin=1&ymax=2&zoom=3'
                                              --tileurl=[URL] 'Tile image URL like http://tile.openstreetmap.org/17/39137/48460.png'
                                              --format=[html|json] 'Output format (Default: html)'")
                        .about("Render a map page to stdout"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("serve", Some(sub_m)) => {
                init_logger(sub_m);
                if let Err(e) = webserver::webserver(sub_m.clone()) {
                    error!("{}", e);
                    process::exit(1)
                }
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", webserver::gen_config(sub_m));
            }
            ("render", Some(sub_m)) => {
                init_logger(sub_m);
                render(sub_m);
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
