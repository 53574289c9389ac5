//! Parse command - extract fields from a single OCR text file.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use bilex_core::models::config::BilexConfig;
use bilex_core::{BillFieldExtractor, BillFields, ExtractionResult};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input OCR text file ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show the overall extraction confidence
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let config = if let Some(path) = config_path {
        BilexConfig::from_file(std::path::Path::new(path))?
    } else {
        BilexConfig::default()
    };

    // Read input (bytes first: a non-text file must fail loudly, not parse)
    let bytes = if args.input.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        if !args.input.exists() {
            anyhow::bail!("Input file not found: {}", args.input.display());
        }
        fs::read(&args.input)?
    };

    info!("Parsing bill text from {}", args.input.display());

    let extractor = BillFieldExtractor::from_config(&config);
    let result = extractor.parse_bytes(&bytes)?;

    print_warnings(&result);

    // Format output
    let output = format_fields(&result.fields, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        println!();
        println!(
            "{} Extraction confidence: {:.1}%",
            style("ℹ").blue(),
            result.fields.overall_confidence * 100.0
        );
    }

    debug!("Parse command complete");

    Ok(())
}

fn print_warnings(result: &ExtractionResult) {
    if result.warnings.is_empty() {
        return;
    }

    eprintln!("{}", style("Extraction warnings:").yellow());
    for warning in &result.warnings {
        eprintln!("  - {}", warning);
    }
}

pub fn format_fields(fields: &BillFields, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(fields)?),
        OutputFormat::Csv => format_csv(fields),
        OutputFormat::Text => Ok(format_text(fields)),
    }
}

fn format_csv(fields: &BillFields) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "amount",
        "bill_number",
        "consumer_number",
        "biller_name",
        "category",
        "billing_date",
        "due_date",
        "units_consumed",
        "overall_confidence",
    ])?;

    wtr.write_record([
        &fields
            .amount
            .value
            .map(|v| format!("{:.2}", v))
            .unwrap_or_default(),
        &fields.bill_number.value.clone().unwrap_or_default(),
        &fields.consumer_number.value.clone().unwrap_or_default(),
        &fields.biller_info.biller_name.clone().unwrap_or_default(),
        &fields.biller_info.category.to_string(),
        &fields
            .billing_date
            .value
            .map(|d| d.to_string())
            .unwrap_or_default(),
        &fields
            .due_date
            .value
            .map(|d| d.to_string())
            .unwrap_or_default(),
        &fields
            .units_consumed
            .value
            .map(|v| v.to_string())
            .unwrap_or_default(),
        &format!("{:.2}", fields.overall_confidence),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(fields: &BillFields) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Biller:          {} ({})\n",
        fields.biller_info.biller_name.as_deref().unwrap_or("-"),
        fields.biller_info.category
    ));
    output.push_str(&format!(
        "Bill number:     {}\n",
        fields.bill_number.value.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Consumer number: {}\n",
        fields.consumer_number.value.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Billing date:    {}\n",
        fields
            .billing_date
            .value
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    output.push_str(&format!(
        "Due date:        {}\n",
        fields
            .due_date
            .value
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    output.push_str(&format!(
        "Units consumed:  {}\n",
        fields
            .units_consumed
            .value
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    output.push_str(&format!(
        "Amount payable:  {}\n",
        fields
            .amount
            .value
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string())
    ));

    output
}
