use clap::Parser;
use calendar_picker::{CalendarPickerExtension, ExtensionConfig, FormContainer, PickerForm};
use std::process;

/// Parse a submitted date the way a calendar picker field would
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raw submitted value
    #[arg(value_name = "VALUE")]
    value: String,

    /// Server-side (PHP date()) mask, defaults to the picker default
    #[arg(short, long)]
    mask: Option<String>,

    /// Enable time of day
    #[arg(short, long)]
    time: bool,

    /// Extra mask translations, e.g. `-c M=M`
    #[arg(short, long = "converter", value_name = "PHP=JS")]
    converter: Vec<String>,

    /// Show the stored components
    #[arg(short = 'r', long)]
    raw: bool,
}

fn main() {
    let args = Args::parse();

    let mut config = ExtensionConfig::default();
    for pair in &args.converter {
        match pair.split_once('=') {
            Some((php, js)) => {
                config.js_converter.insert(php.to_string(), js.to_string());
            }
            None => {
                eprintln!("Invalid converter entry '{pair}', expected PHP=JS");
                process::exit(2);
            }
        }
    }

    let registration = match CalendarPickerExtension::new(config).compile() {
        Ok(registration) => registration,
        Err(err) => {
            eprintln!("Error configuring picker: {err}");
            process::exit(1);
        }
    };

    let mut form = PickerForm::default();
    let method = registration.method_name();
    let picker = match registration.invoke(&mut form, method, "date", None, None) {
        Ok(picker) => picker,
        Err(err) => {
            eprintln!("Error creating picker: {err}");
            process::exit(1);
        }
    };
    if args.time {
        picker.use_time("Invalid time");
    }
    if let Some(mask) = &args.mask {
        picker.set_mask(mask.as_str());
    }
    picker.load_http_data(args.value.as_bytes());

    println!("Mask:     {}", picker.mask());
    println!("JS mask:  {}", picker.js_mask());
    match picker.value() {
        Some(value) => {
            println!("Value:    {value}");
            println!("Display:  {}", picker.display_value());
        }
        None if picker.is_filled() => println!("Value:    (invalid)"),
        None => println!("Value:    (empty)"),
    }

    for violation in picker.validate() {
        println!("Error:    {} ({} rule)", violation.message, violation.rule);
    }

    if args.raw {
        println!();
        println!("Components:");
        println!("{}", "-".repeat(40));
        let show = |v: Option<i64>| v.map_or("-".to_string(), |v| v.to_string());
        println!("Year:   {}", show(picker.year()));
        println!("Month:  {}", show(picker.month()));
        println!("Day:    {}", show(picker.day()));
        println!("Hour:   {}", show(picker.hour()));
        println!("Minute: {}", show(picker.minute()));
        println!("Second: {}", show(picker.second()));
    }

    if !form.is_valid() {
        process::exit(1);
    }
}
