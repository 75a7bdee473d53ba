use anyhow::ensure;
use clap::Parser;

use mdverify::args_parser::Args;
use mdverify::checks::suite;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut checks = suite::stability_checks(args.steps);
    checks.extend(suite::reversibility_checks());
    checks.push(suite::acceptance_check());

    if let Some(filter) = &args.filter {
        checks.retain(|c| c.label.contains(filter.as_str()));
    }

    if args.list {
        for check in &checks {
            println!("{}", check.label);
        }
        return Ok(());
    }

    let total = checks.len();
    let mut failures = 0usize;
    for check in checks {
        match (check.run)() {
            Ok(()) => println!("PASS  {}", check.label),
            Err(e) => {
                failures += 1;
                println!("FAIL  {}", check.label);
                eprintln!("{e}");
            }
        }
    }

    println!("{} of {total} checks passed", total - failures);
    ensure!(failures == 0, "{failures} of {total} checks failed");
    Ok(())
}
