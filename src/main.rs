use saying::say;
use std::env;
use std::fs;
use std::time::Instant;
use tessera_hir::cli::parse_args;
use tessera_hir::config::CompileConfig;
use tessera_hir::hir::root::Root;
use tessera_hir::messages::display::print_compiler_messages;
use tessera_hir::pipeline::compile;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            say!(Red "error: ", e);
            print_usage();
            std::process::exit(1);
        }
    };

    std::process::exit(run(config));
}

fn run(config: CompileConfig) -> i32 {
    let start = Instant::now();
    let dummy_output_on_error = config.needs_dummy_output_on_error();
    let output_path = config.output_path.clone();

    let mut root = Root::new(config);
    let compiled_cleanly = compile(&mut root);

    print_compiler_messages(&root.messages);

    if !compiled_cleanly {
        if dummy_output_on_error {
            if let Some(out) = &output_path {
                let _ = fs::write(out, b"");
            }
        }
    } else {
        say!(Dark "compiled in ", Bright format!("{:?}", start.elapsed()));
    }

    root.config.exit_code(compiled_cleanly)
}

fn print_usage() {
    println!("Usage: tessc [flags] <file>");
    println!("  -g          keep debug symbols");
    println!("  -l <backend>  llvm (default) or c");
    println!("  -t          run embedded unit tests instead of main");
    println!("  -x          strict-error mode: exit 0 only if compilation fails");
    println!("  -o <out>    output path");
}
