use std::{
    env,
    io::{self, Read},
    path::PathBuf,
    process,
};

use chrono::{NaiveDate, Utc};
use colored::Colorize;

use shopbooks::{
    books::Books,
    demo,
    init,
    ledger::ReportPeriod,
    reports::ReportService,
    storage::{load_books_from_path, save_books_to_path},
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("{} {err}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });

    match command.as_str() {
        "new" => {
            let name = args.next().unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });

            let books = Books::new(name);
            println!("{}", serde_json::to_string_pretty(&books)?);
        }
        "demo" => {
            let today = Utc::now().date_naive();
            let books = demo::demo_books(today, 14);
            println!("{}", serde_json::to_string_pretty(&books)?);
        }
        "save" => {
            let path = require_path(args.next());
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            let books: Books = serde_json::from_str(&buffer)?;
            save_books_to_path(&books, &path)?;
            println!("Saved books to {}", path.display());
        }
        "load" => {
            let path = require_path(args.next());
            let books = load_books_from_path(&path)?;
            println!("{}", serde_json::to_string_pretty(&books)?);
        }
        "summary" => {
            let path = require_path(args.next());
            let books = load_books_from_path(&path)?;
            print_summary(&books);
        }
        "report" => {
            let path = require_path(args.next());
            let books = load_books_from_path(&path)?;
            let period = parse_period(args.next(), args.next())?;
            print_report(&books, &period);
        }
        "top" => {
            let path = require_path(args.next());
            let books = load_books_from_path(&path)?;
            let n = match args.next() {
                Some(raw) => raw.parse()?,
                None => 5,
            };
            print_top(&books, n);
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn require_path(arg: Option<String>) -> PathBuf {
    arg.map(PathBuf::from).unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    })
}

fn parse_period(
    first: Option<String>,
    second: Option<String>,
) -> Result<ReportPeriod, Box<dyn std::error::Error>> {
    match (first, second) {
        (Some(start), Some(end)) => Ok(ReportPeriod::DateRange {
            start: NaiveDate::parse_from_str(&start, "%Y-%m-%d")?,
            end: NaiveDate::parse_from_str(&end, "%Y-%m-%d")?,
        }),
        _ => Ok(ReportPeriod::Daily),
    }
}

fn print_summary(books: &Books) {
    let ledger = books.ledger.summarize();
    let summary = ReportService::financial_summary(books);

    println!("{}", format!("Books: {}", books.name).bold());
    println!(
        "  {} Rp {:.2}",
        "Total income:  ".green(),
        ledger.total_income
    );
    println!(
        "  {} Rp {:.2}",
        "Total expense: ".red(),
        ledger.total_expense
    );
    println!("  {} Rp {:.2}", "Balance:       ".bold(), ledger.balance);
    println!(
        "  Fixed Rp {:.2} / Variable Rp {:.2} expenses outside ledger",
        summary.fixed_expenses, summary.variable_expenses
    );
    for (label, share) in summary.breakdown() {
        println!("    {label}: {:.1}%", share * 100.0);
    }
}

fn print_report(books: &Books, period: &ReportPeriod) {
    let today = Utc::now().date_naive();
    let records = books.ledger.filter_by_period_on(period, today);
    if records.is_empty() {
        println!("No records for period {}", period.label());
        return;
    }
    println!("{}", format!("Report ({})", period.label()).bold());
    for record in &records {
        println!(
            "  {}  {:<20}  {:?}  Rp {:.2}  {}",
            record.date,
            record.category,
            record.kind,
            record.amount,
            record.note.as_deref().unwrap_or("")
        );
    }
    for totals in ReportService::daily_series(books, period, today) {
        println!(
            "  {}  income Rp {:.2}  expense Rp {:.2}",
            totals.date, totals.income, totals.expense
        );
    }
}

fn print_top(books: &Books, n: usize) {
    for (rank, totals) in ReportService::top_products(books, n).iter().enumerate() {
        println!(
            "{:>2}. {:<50} {:>4} units  Rp {:.2}",
            rank + 1,
            totals.product_name,
            totals.units,
            totals.revenue
        );
    }
}

fn print_usage() {
    eprintln!(
        "Usage: shopbooks_cli <command>\n\
         Commands:\n  \
         new <name>\n  \
         demo\n  \
         save <file.json> < books.json\n  \
         load <file.json>\n  \
         summary <file.json>\n  \
         report <file.json> [<start> <end>]\n  \
         top <file.json> [n]"
    );
}
