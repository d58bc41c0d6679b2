use clap::Parser;
use dom_classlist::{Cli, Commands, Step};

#[test]
fn test_cli_parse_apply() {
    let args = vec![
        "classlist",
        "apply",
        "-c", "btn active",
        "-s", "toggle:active",
    ];

    let cli = Cli::parse_from(args);

    match cli.command {
        Commands::Apply(args) => {
            assert_eq!(args.classes, vec!["btn active"]);
            assert_eq!(args.script.steps, vec![Step::Toggle { name: "active".to_string() }]);
            assert!(args.script.script.is_none());
            assert!(!args.script.native);
            assert!(!args.script.json);
            assert!(!cli.verbose);
        }
        Commands::Pipe(_) => panic!("Unexpected Pipe command"),
    }
}

#[test]
fn test_cli_parse_with_flags() {
    let args = vec![
        "classlist",
        "apply",
        "--class", "a",
        "--class", "b",
        "--step", "add:x",
        "--step", "swap:a:z",
        "--script", "ops.yaml",
        "--probe", "x",
        "--native",
        "--json",
        "--verbose",
    ];

    let cli = Cli::parse_from(args);
    assert!(cli.verbose);

    match cli.command {
        Commands::Apply(args) => {
            assert_eq!(args.classes, vec!["a", "b"]);
            assert_eq!(args.script.steps.len(), 2);
            assert_eq!(args.script.script.unwrap().to_str().unwrap(), "ops.yaml");
            assert_eq!(args.script.probes, vec!["x"]);
            assert!(args.script.native);
            assert!(args.script.json);
        }
        Commands::Pipe(_) => panic!("Unexpected Pipe command"),
    }
}

#[test]
fn test_cli_parse_pipe() {
    let cli = Cli::parse_from(vec!["classlist", "pipe", "-s", "remove-matching:^tmp-"]);

    match cli.command {
        Commands::Pipe(args) => {
            assert_eq!(
                args.script.steps,
                vec![Step::RemoveMatching { pattern: "^tmp-".to_string() }]
            );
        }
        Commands::Apply(_) => panic!("Unexpected Apply command"),
    }
}

#[test]
fn test_cli_rejects_malformed_step() {
    let result = Cli::try_parse_from(vec!["classlist", "apply", "-c", "a", "-s", "explode:a"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_requires_class_for_apply() {
    let result = Cli::try_parse_from(vec!["classlist", "apply", "-s", "add:a"]);
    assert!(result.is_err());
}

#[test]
fn test_load_requires_steps_or_script() {
    let cli = Cli::parse_from(vec!["classlist", "pipe"]);
    match cli.command {
        Commands::Pipe(args) => {
            let err = args.script.load().unwrap_err();
            assert!(err.to_string().contains("--step"), "Unexpected error: {}", err);
        }
        Commands::Apply(_) => panic!("Unexpected Apply command"),
    }
}
