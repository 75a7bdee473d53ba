use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Run only checks whose label contains this substring
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Print the check labels without running anything
    #[arg(long)]
    pub list: bool,

    /// Steps each stability check advances
    #[arg(short, long, default_value_t = 100)]
    pub steps: usize,
}
