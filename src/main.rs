use svg2html::{load_config, svg_file_to_html, transform, TransformConfig};
use std::io::{self, Read};

/// Flags that consume the following argument as their value.
const VALUE_FLAGS: [&str; 5] = ["--color", "--width", "--height", "--view-box", "--config"];

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("svg2html - Convert SVG markup into HTML-embeddable icon fragments");
        println!();
        println!("Usage: svg2html [OPTIONS] [FILE]");
        println!();
        println!("Reads SVG from FILE or stdin, rewrites dimensions and colors, and");
        println!("prints the result to stdout.");
        println!();
        println!("Options:");
        println!("  -h, --help           Show this help message");
        println!("  --color <COLOR>      Target stroke/fill color, e.g. \"#FF0000\"");
        println!("                       (required unless --config is given)");
        println!("  --width <PX>         Width of the svg element (default: 20)");
        println!("  --height <PX>        Height of the svg element (default: 20)");
        println!("  --view-box <BOX>     viewBox value (default: \"0 0 20 20\")");
        println!("  --config <FILE>      Load the full config from a JSON file instead");
        println!();
        println!("Example:");
        println!("  svg2html --color '#FF0000' icon.svg");
        println!("  cat icon.svg | svg2html --color '#FF0000' --width 24 --height 24");
        return;
    }

    let mut config = match flag_value(&args, "--config") {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => match flag_value(&args, "--color") {
            Some(color) => TransformConfig::new(&color),
            None => {
                eprintln!("Error: --color is required (or pass --config <FILE>)");
                std::process::exit(1);
            }
        },
    };

    if let Some(color) = flag_value(&args, "--color") {
        config.color = color;
    }
    if let Some(raw) = flag_value(&args, "--width") {
        config.width = parse_dimension(&raw, "--width");
    }
    if let Some(raw) = flag_value(&args, "--height") {
        config.height = parse_dimension(&raw, "--height");
    }
    if let Some(view_box) = flag_value(&args, "--view-box") {
        config.view_box = view_box;
    }

    // Get input from the file argument or stdin
    let input: String = match positional(&args) {
        Some(path) => match svg_file_to_html(&path) {
            Ok(svg) => svg,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).expect("Failed to read from stdin");
            buf
        }
    };

    if input.trim().is_empty() {
        eprintln!("Error: No input provided");
        std::process::exit(1);
    }

    println!("{}", transform(&input, &config));
}

/// Value of `name` in `args`, if the flag is present and followed by one.
fn flag_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

/// First argument that is neither a flag nor a flag value.
fn positional(args: &[String]) -> Option<String> {
    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if VALUE_FLAGS.contains(&arg.as_str()) {
            i += 2;
        } else if arg.starts_with('-') {
            i += 1;
        } else {
            return Some(arg.clone());
        }
    }
    None
}

fn parse_dimension(raw: &str, flag: &str) -> u32 {
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Error: {} expects a whole number of pixels, got '{}'", flag, raw);
            std::process::exit(1);
        }
    }
}
