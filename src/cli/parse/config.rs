use std::{path::PathBuf, time::Duration};

use clap::ArgMatches;

use otter_bench::{
    config::{defaults, Config},
    selection::{Level, Selection, Track},
    structures::expectation::Expectation,
};

/// A config from the arguments of a subcommand, with `repeat` as the default number of trials.
pub fn config_from_args(args: &ArgMatches, repeat: usize) -> Config {
    let mut the_config = Config::default();
    the_config.repeat.value = repeat;

    if let Ok(Some(secs)) = args.try_get_one::<u64>("time_limit") {
        the_config.time_limit = match secs {
            0 => None,
            _ => Some(Duration::from_secs(*secs)),
        }
    };

    if let Ok(Some(count)) = args.try_get_one::<usize>("repeat") {
        if !the_config.repeat.set(*count) {
            let (min, max) = the_config.repeat.min_max();
            eprintln!("c Ignoring repeat {count}, as outside {min}..={max}");
        }
    };

    if let Ok(Some(count)) = args.try_get_one::<usize>("max_jobs") {
        if !the_config.max_jobs.set(*count) {
            let (min, max) = the_config.max_jobs.min_max();
            eprintln!("c Ignoring maxjobs {count}, as outside {min}..={max}");
        }
    };

    if let Ok(Some(millis)) = args.try_get_one::<u64>("poll_interval") {
        if !the_config.poll_interval.set(Duration::from_millis(*millis)) {
            eprintln!("c Ignoring poll interval {millis}ms");
        }
    };

    if let Ok(Some(template)) = args.try_get_one::<String>("path_template") {
        the_config.path_template = template.clone()
    };

    if let Ok(Some(dir)) = args.try_get_one::<PathBuf>("work_dir") {
        the_config.work_dir = dir.clone()
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("satisfiable") {
        the_config.expectation = Expectation::Satisfiable
    };

    if let Ok(Some(expect)) = args.try_get_one::<String>("expect") {
        if let Ok(expectation) = expect.parse() {
            the_config.expectation = expectation
        }
    };

    if let Ok(Some(value)) = args.try_get_one::<bool>("strict_lines") {
        the_config.strict_solution_lines = *value
    };

    if let Ok(Some(value)) = args.try_get_one::<bool>("check_header") {
        the_config.dimacs.check_header = *value
    };

    the_config
}

pub fn selection_from_args(args: &ArgMatches) -> Selection {
    let mut the_selection = Selection::default();

    if let Ok(Some(tracks)) = args.try_get_many::<String>("track") {
        the_selection.tracks = tracks.filter_map(|track| track.parse::<Track>().ok()).collect()
    };

    if let Ok(Some(levels)) = args.try_get_many::<String>("level") {
        the_selection.levels = levels.filter_map(|level| level.parse::<Level>().ok()).collect()
    };

    if let Ok(Some(value)) = args.try_get_one::<bool>("include_unknown") {
        the_selection.include_unknown = *value
    };

    if let Ok(Some(dir)) = args.try_get_one::<PathBuf>("selection_dir") {
        the_selection.dir = dir.clone()
    };

    the_selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::cli::cli;

    #[test]
    fn check_args() {
        let matches = cli()
            .try_get_matches_from(["otter_bench", "check", "-t", "0", "-s", "-p", "cnf/{name}", "x", "solver"])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        let config = config_from_args(args, defaults::CHECK_REPEAT);

        assert_eq!(config.time_limit, None);
        assert_eq!(config.repeat.value, defaults::CHECK_REPEAT);
        assert_eq!(config.expectation, Expectation::Satisfiable);
        assert_eq!(config.instance_path("x"), PathBuf::from("cnf/x"));
    }

    #[test]
    fn schedule_args() {
        let matches = cli()
            .try_get_matches_from([
                "otter_bench", "--strict-lines", "schedule", "--track", "random,CRAFTED", "--level", "easy",
                "--timeout", "5", "--maxjobs", "4", "--include-unknown", "solver", "{input}",
            ])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();

        let config = config_from_args(args, defaults::SCHEDULE_REPEAT);
        assert_eq!(config.time_limit, Some(Duration::from_secs(5)));
        assert_eq!(config.max_jobs.value, 4);
        assert!(config.strict_solution_lines);

        let selection = selection_from_args(args);
        assert_eq!(selection.tracks, vec![Track::Random, Track::Crafted]);
        assert_eq!(selection.levels, vec![Level::Easy]);
        assert!(selection.include_unknown);
    }

    #[test]
    fn unknown_track_or_level() {
        for (option, value) in [("--track", "bogus"), ("--track", "random,bogus"), ("--level", "trivial")] {
            let result = cli().try_get_matches_from(["otter_bench", "schedule", option, value, "solver"]);
            assert_eq!(
                result.map(|_| ()).map_err(|e| e.kind()),
                Err(clap::error::ErrorKind::InvalidValue),
                "{option} {value}"
            );
        }
    }
}
