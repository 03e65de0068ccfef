/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

use time::OffsetDateTime;

use rustop::opts;

use cheapest_path::{reader, PathFinder};

use std::error::Error;

const STOPS: &[(&str, &str, u64)] = &[
    ("A", "B", 3),
    ("A", "D", 3),
    ("A", "F", 6),
    ("B", "D", 1),
    ("B", "E", 3),
    ("C", "E", 2),
    ("C", "F", 3),
    ("D", "E", 1),
    ("D", "F", 2),
    ("E", "F", 5),
];

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Compute the cheapest path between two stops.";
        opt from:String=String::from("F"), desc:"Start of the path.";
        opt to:String=String::from("A"), desc:"End of the path.";
        param file:Option<String>, desc:"Edge list file (default: built-in stops)";
    }
    .parse_or_exit();

    let tstart = OffsetDateTime::now_utc();
    let mut finder = PathFinder::new();
    match args.file {
        Some(ref file) => finder.set_graph(reader::read_from_file::<_, u64>(file)?),
        None => finder.build_from_edges(STOPS.iter().map(|&(u, v, c)| (u.to_string(), v.to_string(), c)))?,
    }
    println!("  number of nodes: {}", finder.graph().num_nodes());
    println!("  number of edges: {}", finder.graph().num_edges());

    let result = finder.find_cheapest_path(&args.from, &args.to)?;
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());

    println!("Sum: {}", result.sum);
    println!("Path: {}", result);

    Ok(())
}
