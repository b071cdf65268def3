use sigillum::{render_png_bytes, render_seal_svg, SealColors};

fn load_theme(path: &str) -> Result<SealColors, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file '{}': {}", path, e))?;
    SealColors::from_json(&data).map_err(|e| format!("Failed to parse theme file '{}': {}", path, e))
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("sigillum - Render the Sigillum Dei Aemeth seal");
        println!();
        println!("Usage: sigillum [OPTIONS]");
        println!();
        println!("Renders the seal as an 800x800 PNG (default) or as an SVG document.");
        println!();
        println!("Options:");
        println!("  -h, --help         Show this help message");
        println!("  -o, --output FILE  Output file (default: sigillum.png)");
        println!("      --svg          Emit SVG instead of PNG (stdout unless -o is given)");
        println!("      --theme FILE   JSON file overriding the default palette");
        println!("      --font NAME    Font family for the lettering (default: Inter)");
        println!("      --transparent  Omit the background fill");
        println!();
        println!("Example:");
        println!("  sigillum -o seal.png");
        println!("  sigillum --svg > seal.svg");
        return;
    }

    let mut output: Option<String> = None;
    let mut theme_path: Option<String> = None;
    let mut font: Option<String> = None;
    let mut svg_only = false;
    let mut transparent = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--svg" => svg_only = true,
            "--transparent" => transparent = true,
            "-o" | "--output" => {
                i += 1;
                match args.get(i) {
                    Some(value) => output = Some(value.clone()),
                    None => {
                        eprintln!("Error: -o/--output requires a file argument");
                        std::process::exit(1);
                    }
                }
            }
            "--theme" => {
                i += 1;
                match args.get(i) {
                    Some(value) => theme_path = Some(value.clone()),
                    None => {
                        eprintln!("Error: --theme requires a file argument");
                        std::process::exit(1);
                    }
                }
            }
            "--font" => {
                i += 1;
                match args.get(i) {
                    Some(value) => font = Some(value.clone()),
                    None => {
                        eprintln!("Error: --font requires a name argument");
                        std::process::exit(1);
                    }
                }
            }
            other => {
                eprintln!("Error: Unknown option '{}'", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let colors = match theme_path {
        Some(ref path) => match load_theme(path) {
            Ok(colors) => colors,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => SealColors::default(),
    };

    let font = font.unwrap_or_else(|| "Inter".to_string());
    let svg = render_seal_svg(&colors, &font, transparent);

    if svg_only {
        match output {
            Some(path) => {
                if let Err(e) = std::fs::write(&path, &svg) {
                    eprintln!("Error: Failed to write '{}': {}", path, e);
                    std::process::exit(1);
                }
            }
            None => print!("{}", svg),
        }
        return;
    }

    let path = output.unwrap_or_else(|| "sigillum.png".to_string());
    let png = match render_png_bytes(svg.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = std::fs::write(&path, &png) {
        eprintln!("Error: Failed to write '{}': {}", path, e);
        std::process::exit(1);
    }
}
