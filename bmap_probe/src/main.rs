mod bitmap_file;

use bitmap_file::BitmapFile;
use bmap_view::{BitmapError, BitmapView, ErrCode};
use clap::{Parser, Subcommand};
use log::{error, info};
use simple_logger::SimpleLogger;

/// Query a free-space bitmap stored in a file. Set bits are busy units.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File holding the bitmap
    #[arg(short, long)]
    file: String,
    /// Number of bits in the bitmap [default: every bit after the offset]
    #[arg(short, long)]
    bits: Option<usize>,
    /// Byte offset of the bitmap inside the file
    #[arg(short, long, default_value_t = 0)]
    offset: usize,
    /// Log level
    #[arg(long, default_value_t = log::LevelFilter::Warn)]
    log_level: log::LevelFilter,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one bit
    Get { index: usize },
    /// Count set and unset bits in a range [default: the whole bitmap]
    Count {
        #[arg(default_value_t = 0)]
        start: usize,
        len: Option<usize>,
    },
    /// Print the first set and first unset bit
    First,
    /// Find any set and any unset bit, starting near a hint
    Anywhere { hint: usize },
    /// Find the next run of unset bits at or after a bit
    NextRange {
        from: usize,
        #[arg(long, default_value_t = 1)]
        min: usize,
        #[arg(long, default_value_t = usize::MAX)]
        max: usize,
    },
    /// Find the longest run of unset bits
    Longest {
        #[arg(default_value_t = usize::MAX)]
        max: usize,
    },
    /// Find the leftmost run that fits
    FirstFit { length: usize },
    /// Find the tightest run that fits
    BestFit { length: usize },
    /// List every run of unset bits
    Runs,
}

fn check_index(view: &BitmapView, index: usize) -> Result<(), BitmapError> {
    if index >= view.size() {
        return Err(BitmapError::with_message(
            ErrCode::ERANGE,
            format!("bit {} out of range for {} bits", index, view.size()),
        ));
    }
    Ok(())
}

/// Check that `[start, start + len)` lies inside the view without overflowing.
fn check_range(view: &BitmapView, start: usize, len: usize) -> Result<(), BitmapError> {
    if len == 0 {
        return Ok(());
    }
    check_index(view, start)?;
    if len > view.size() - start {
        return Err(BitmapError::with_message(
            ErrCode::ERANGE,
            format!("range {}+{} out of range for {} bits", start, len, view.size()),
        ));
    }
    Ok(())
}

fn show<T: std::fmt::Debug>(found: Option<T>) -> String {
    match found {
        Some(value) => format!("{:?}", value),
        None => String::from("none"),
    }
}

fn run(view: BitmapView, command: Command) -> Result<(), BitmapError> {
    match command {
        Command::Get { index } => {
            check_index(&view, index)?;
            println!("{}", u8::from(view.get(index)));
        }
        Command::Count { start, len } => {
            let len = len.unwrap_or(view.size().saturating_sub(start));
            check_range(&view, start, len)?;
            let set = view.count_in_range(start, len, true);
            println!("set {} unset {}", set, len - set);
        }
        Command::First => {
            println!("set {}", show(view.find_first_set()));
            println!("unset {}", show(view.find_first_unset()));
        }
        Command::Anywhere { hint } => {
            check_index(&view, hint)?;
            println!("set {}", show(view.find_one_anywhere_set(hint)));
            println!("unset {}", show(view.find_one_anywhere_unset(hint)));
        }
        Command::NextRange { from, min, max } => {
            let found = view.find_next_range_of_unset_bits(from, min, max);
            println!("{}", show(found));
        }
        Command::Longest { max } => {
            println!("{}", show(view.find_longest_range_of_unset_bits(max)));
        }
        Command::FirstFit { length } => println!("{}", show(view.find_first_fit(length))),
        Command::BestFit { length } => println!("{}", show(view.find_best_fit(length))),
        Command::Runs => {
            for found in view.unset_runs() {
                println!("{} {}", found.start, found.length);
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    SimpleLogger::new().init().unwrap();
    log::set_max_level(args.log_level);

    info!("Use bitmap file \"{}\"", args.file);
    let file = match BitmapFile::load(&args.file, args.offset, args.bits) {
        Ok(file) => file,
        Err(e) => {
            error!("Load bitmap failed: {}", e);
            std::process::exit(e.code() as i32);
        }
    };
    let view = file.view();
    info!("{} bits, {} busy", view.size(), view.count_slow(true));

    if let Err(e) = run(view, args.command) {
        error!("Error occured: {}", e);
        std::process::exit(e.code() as i32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_checks() {
        let data = [0u8; 4];
        let view = BitmapView::new(&data, 32);
        assert!(check_range(&view, 0, 32).is_ok());
        assert!(check_range(&view, 31, 1).is_ok());
        assert!(check_range(&view, 40, 0).is_ok());
        assert_eq!(check_range(&view, 32, 1).unwrap_err().code(), ErrCode::ERANGE);
        assert_eq!(check_range(&view, 10, 23).unwrap_err().code(), ErrCode::ERANGE);
        assert_eq!(
            check_range(&view, 1, usize::MAX).unwrap_err().code(),
            ErrCode::ERANGE
        );
    }
}
