//! Command dispatch for the `monthbook` binary.

use std::fs;

use monthbook_core::{
    exchange, CategoryService, CoreError, QuickAddForm, QuickAddService, SummaryService,
    TransactionQuery, TransactionService,
};
use monthbook_domain::{FlowKind, MonthKey, MonthState, TransactionDraft, TransactionId};
use thiserror::Error;

use crate::context::{today, AppContext};
use crate::formatters::money;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
}

const USAGE: &str = "\
monthbook — per-month budget ledger

Commands:
  show [YYYY-MM] [--filter all|expense|income] [--sort date|amount|category|description] [--search TEXT]
  add <expense|income> <category> <amount> [description] [--date YYYY-MM-DD]
  rm <id>
  quick list
  quick new <expense|income> <category> <amount> [description]
  quick apply <expense|income> <index>
  quick rm <expense|income> <index>
  cat add <expense|income>
  cat rm <expense|income> <index>
  cat name <expense|income> <index> <new name>
  cat budget <expense|income> <index> <amount>
  balance <amount>
  month [prev|next|set YYYY-MM]
  export [path]
  import <path>";

pub fn run(raw_args: &[String]) -> Result<(), CliError> {
    let args: Vec<&str> = raw_args.iter().map(String::as_str).collect();
    let Some((&command, rest)) = args.split_first() else {
        println!("{USAGE}");
        return Ok(());
    };
    match command {
        "help" | "--help" | "-h" => {
            println!("{USAGE}");
            Ok(())
        }
        "show" => show(rest),
        "add" => add(rest),
        "rm" => remove(rest),
        "quick" => quick(rest),
        "cat" => category(rest),
        "balance" => balance(rest),
        "month" => month(rest),
        "export" => export(rest),
        "import" => import(rest),
        other => Err(CliError::Input(format!(
            "unknown command `{other}`, try `monthbook help`"
        ))),
    }
}

fn show(args: &[&str]) -> Result<(), CliError> {
    let ctx = AppContext::open()?;
    let mut key = ctx.month();
    let mut query = TransactionQuery::default();
    let mut rest = args.iter();
    while let Some(&arg) = rest.next() {
        match arg {
            "--filter" => query.filter = parse_with(next_value(&mut rest, "--filter")?)?,
            "--sort" => query.sort_key = parse_with(next_value(&mut rest, "--sort")?)?,
            "--search" => query.search_text = next_value(&mut rest, "--search")?.to_string(),
            raw => key = parse_month(raw)?,
        }
    }
    let state = ctx.load(key)?;
    render_month(key, &state, &query);
    Ok(())
}

fn add(args: &[&str]) -> Result<(), CliError> {
    let (positional, date) = split_date_flag(args)?;
    let [kind, category, amount, rest @ ..] = positional.as_slice() else {
        return Err(CliError::Usage(
            "add <expense|income> <category> <amount> [description] [--date YYYY-MM-DD]",
        ));
    };
    let draft = TransactionDraft {
        kind: parse_kind(kind)?,
        category: category.to_string(),
        description: rest.join(" "),
        amount: amount.to_string(),
        date,
    };
    let ctx = AppContext::open()?;
    let mut state = ctx.load_active()?;
    match TransactionService::add(&mut state, &draft, today()) {
        Some(id) => {
            ctx.save_active(&state)?;
            println!("Added transaction {id}");
        }
        None => println!("No transaction added (empty category or invalid amount)"),
    }
    Ok(())
}

fn remove(args: &[&str]) -> Result<(), CliError> {
    let [raw_id] = args else {
        return Err(CliError::Usage("rm <id>"));
    };
    let id: i64 = raw_id
        .parse()
        .map_err(|_| CliError::Input(format!("`{raw_id}` is not a transaction id")))?;
    let ctx = AppContext::open()?;
    let mut state = ctx.load_active()?;
    if TransactionService::remove(&mut state, TransactionId::from_millis(id)) {
        ctx.save_active(&state)?;
        println!("Removed transaction {id}");
    } else {
        println!("No transaction with id {id}");
    }
    Ok(())
}

fn quick(args: &[&str]) -> Result<(), CliError> {
    let ctx = AppContext::open()?;
    let mut state = ctx.load_active()?;
    match args {
        ["list"] => {
            for kind in [FlowKind::Expense, FlowKind::Income] {
                println!("{kind} quick adds:");
                let list = state.quick_adds.list(kind);
                if list.is_empty() {
                    println!("  (none)");
                }
                for (index, entry) in list.iter().enumerate() {
                    println!(
                        "  {index}  {} — {} {}",
                        entry.category,
                        entry.description,
                        money(entry.amount)
                    );
                }
            }
            Ok(())
        }
        ["new", kind, category, amount, rest @ ..] => {
            let form = QuickAddForm {
                category: category.to_string(),
                description: rest.join(" "),
                amount: amount.to_string(),
            };
            if QuickAddService::create(&mut state, parse_kind(kind)?, &form) {
                ctx.save_active(&state)?;
                println!("Created quick add for {category}");
            } else {
                println!("No quick add created (empty category or invalid amount)");
            }
            Ok(())
        }
        ["apply", kind, index] => {
            match QuickAddService::apply(
                &mut state,
                parse_kind(kind)?,
                parse_index(index)?,
                today(),
            ) {
                Some(id) => {
                    ctx.save_active(&state)?;
                    println!("Added transaction {id}");
                }
                None => println!("No quick add at index {index}"),
            }
            Ok(())
        }
        ["rm", kind, index] => {
            if QuickAddService::remove(&mut state, parse_kind(kind)?, parse_index(index)?) {
                ctx.save_active(&state)?;
                println!("Removed quick add {index}");
            } else {
                println!("No quick add at index {index}");
            }
            Ok(())
        }
        _ => Err(CliError::Usage(
            "quick list | quick new <kind> <category> <amount> [description] | quick apply <kind> <index> | quick rm <kind> <index>",
        )),
    }
}

fn category(args: &[&str]) -> Result<(), CliError> {
    let ctx = AppContext::open()?;
    let mut state = ctx.load_active()?;
    match args {
        ["add", kind] => {
            CategoryService::add(&mut state, parse_kind(kind)?);
            ctx.save_active(&state)?;
            println!("Added category");
            Ok(())
        }
        ["rm", kind, index] => {
            if CategoryService::remove(&mut state, parse_kind(kind)?, parse_index(index)?) {
                ctx.save_active(&state)?;
                println!("Removed category {index}");
            } else {
                println!("No category at index {index}");
            }
            Ok(())
        }
        ["name", kind, index, rest @ ..] if !rest.is_empty() => {
            let name = rest.join(" ");
            if CategoryService::set_name(&mut state, parse_kind(kind)?, parse_index(index)?, &name)
            {
                ctx.save_active(&state)?;
                println!("Renamed category {index} to {name}");
            } else {
                println!("No category at index {index}");
            }
            Ok(())
        }
        ["budget", kind, index, value] => {
            if CategoryService::set_budget(
                &mut state,
                parse_kind(kind)?,
                parse_index(index)?,
                value,
            ) {
                ctx.save_active(&state)?;
                println!("Updated budget for category {index}");
            } else {
                println!("No category at index {index}");
            }
            Ok(())
        }
        _ => Err(CliError::Usage(
            "cat add <kind> | cat rm <kind> <index> | cat name <kind> <index> <new name> | cat budget <kind> <index> <amount>",
        )),
    }
}

fn balance(args: &[&str]) -> Result<(), CliError> {
    let [raw] = args else {
        return Err(CliError::Usage("balance <amount>"));
    };
    let ctx = AppContext::open()?;
    let mut state = ctx.load_active()?;
    state.beginning_balance = monthbook_domain::coerce_amount(raw);
    ctx.save_active(&state)?;
    println!("Beginning balance set to {}", money(state.beginning_balance));
    Ok(())
}

fn month(args: &[&str]) -> Result<(), CliError> {
    let mut ctx = AppContext::open()?;
    match args {
        [] => {
            println!("{}", ctx.month());
            Ok(())
        }
        [direction @ ("prev" | "next")] => {
            let offset = if *direction == "prev" { -1 } else { 1 };
            let key = ctx.month().offset(offset);
            ctx.set_month(key)?;
            println!("{key}");
            Ok(())
        }
        ["set", raw] => {
            let key = parse_month(raw)?;
            ctx.set_month(key)?;
            println!("{key}");
            Ok(())
        }
        _ => Err(CliError::Usage("month [prev|next|set YYYY-MM]")),
    }
}

fn export(args: &[&str]) -> Result<(), CliError> {
    let ctx = AppContext::open()?;
    let state = ctx.load_active()?;
    let document = exchange::export_month(&state)?;
    let path = match args {
        [] => exchange::export_file_name(ctx.month()),
        [path] => path.to_string(),
        _ => return Err(CliError::Usage("export [path]")),
    };
    fs::write(&path, document).map_err(CoreError::Io)?;
    println!("Exported {} to {path}", ctx.month());
    Ok(())
}

fn import(args: &[&str]) -> Result<(), CliError> {
    let [path] = args else {
        return Err(CliError::Usage("import <path>"));
    };
    let ctx = AppContext::open()?;
    let mut state = ctx.load_active()?;
    let document = fs::read_to_string(path).map_err(CoreError::Io)?;
    exchange::import_month(&mut state, &document)
        .map_err(|err| CliError::Input(format!("invalid budget document: {err}")))?;
    ctx.save_active(&state)?;
    println!("Imported {path} into {}", ctx.month());
    Ok(())
}

fn render_month(key: MonthKey, state: &MonthState, query: &TransactionQuery) {
    let totals = SummaryService::totals(state);
    println!("Monthly Budget — {key}");
    println!(
        "Beginning balance: {}   Current balance: {}",
        money(state.beginning_balance),
        money(totals.current_balance)
    );
    println!();
    render_category_table(state, FlowKind::Expense, "Spent", totals.total_expenses);
    println!();
    render_category_table(state, FlowKind::Income, "Received", totals.total_income);
    println!();
    println!("Transactions");
    let rows = TransactionService::filter_sort(state, query);
    if rows.is_empty() {
        println!("  (no transactions)");
        return;
    }
    for txn in rows {
        println!(
            "  {}  {}  {:<7}  {:<24}  {:<24}  {:>12}",
            txn.id,
            txn.date,
            txn.kind.as_str(),
            txn.category,
            txn.description,
            money(txn.amount)
        );
    }
}

fn render_category_table(state: &MonthState, kind: FlowKind, actual_label: &str, total: f64) {
    let heading = match kind {
        FlowKind::Expense => "Expenses",
        FlowKind::Income => "Income",
    };
    println!("{heading} ({} {})", actual_label.to_lowercase(), money(total));
    println!("  {:<3} {:<28} {:>12} {:>12}", "#", "Category", "Budget", actual_label);
    for (index, row) in SummaryService::category_rows(state, kind).iter().enumerate() {
        println!(
            "  {:<3} {:<28} {:>12} {:>12}",
            index,
            row.name,
            money(row.budget),
            money(row.actual)
        );
    }
}

fn parse_kind(raw: &str) -> Result<FlowKind, CliError> {
    raw.parse().map_err(CliError::Input)
}

fn parse_month(raw: &str) -> Result<MonthKey, CliError> {
    raw.parse().map_err(CliError::Input)
}

fn parse_index(raw: &str) -> Result<usize, CliError> {
    raw.parse()
        .map_err(|_| CliError::Input(format!("`{raw}` is not a list index")))
}

fn parse_with<T: std::str::FromStr<Err = String>>(raw: &str) -> Result<T, CliError> {
    raw.parse().map_err(CliError::Input)
}

fn next_value<'a>(rest: &mut std::slice::Iter<'a, &'a str>, flag: &str) -> Result<&'a str, CliError> {
    rest.next()
        .copied()
        .ok_or_else(|| CliError::Input(format!("{flag} needs a value")))
}

fn split_date_flag<'a>(
    args: &'a [&'a str],
) -> Result<(Vec<&'a str>, Option<chrono::NaiveDate>), CliError> {
    let mut positional = Vec::new();
    let mut date = None;
    let mut rest = args.iter();
    while let Some(&arg) = rest.next() {
        if arg == "--date" {
            let raw = next_value(&mut rest, "--date")?;
            date = Some(raw.parse().map_err(|_| {
                CliError::Input(format!("`{raw}` is not a date (expected YYYY-MM-DD)"))
            })?);
        } else {
            positional.push(arg);
        }
    }
    Ok((positional, date))
}
