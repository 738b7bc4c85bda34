//! Ring Buffer Demo
//!
//! Walkthrough RingBuffer<i32>: buffer kosong, fill, wraparound, lalu
//! baca ulang lewat reference.
//!
//! Usage:
//!   cargo run --bin ring_demo [OPTIONS]

use circbuf::{BufferError, RingBuffer};

/// Demo configuration
struct DemoConfig {
    size: usize,
    verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            size: 3,
            verbose: false,
        }
    }
}

fn print_contents(buf: &RingBuffer<i32>) -> Result<(), BufferError> {
    let mut line = String::from("contents: ");
    for position in 0..buf.capacity() {
        line.push_str(&format!("{} ", buf.get(position)?));
    }
    println!("{}", line);
    Ok(())
}

fn print_contents_ref(buf: &RingBuffer<i32>) -> Result<(), BufferError> {
    let mut line = String::from("contents: ");
    for position in 0..buf.capacity() {
        line.push_str(&format!("{} ", *buf.get_ref(position)?));
    }
    println!("{}", line);
    Ok(())
}

fn expected(from: i32, size: usize) -> String {
    (0..size as i32)
        .map(|i| (from - i).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_demo(config: &DemoConfig) -> Result<(), BufferError> {
    let size = config.size;
    let mut buf: RingBuffer<i32> = RingBuffer::create_empty();

    println!("Allocating ringbuffer of size: {}", size);
    buf.allocate(size)?;

    println!(
        "Printing empty buffer contents, should contain: {}",
        vec!["0"; size].join(" ")
    );
    print_contents(&buf)?;

    for i in 0..size as i32 {
        buf.insert(i)?;
    }
    println!(
        "put 0..{} into buffer, should contain: {}",
        size - 1,
        expected(size as i32 - 1, size)
    );
    print_contents(&buf)?;

    for i in 0..=size as i32 {
        buf.insert(i)?;
    }
    println!(
        "put 0..{} into buffer, should contain: {}",
        size,
        expected(size as i32, size)
    );
    print_contents(&buf)?;

    println!(
        "Reading back same contents by reference, should contain: {}",
        expected(size as i32, size)
    );
    print_contents_ref(&buf)?;

    println!("Lookback past the oldest slot should fail");
    match buf.get(size) {
        Err(e) => println!("get({}) failed: {}", size, e),
        Ok(v) => println!("get({}) unexpectedly returned {}", size, v),
    }

    buf.release();
    println!("DONE");
    Ok(())
}

fn parse_args() -> DemoConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = DemoConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--size" | "-s" => {
                if i + 1 < args.len() {
                    config.size = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("Ring Buffer Demo\n");
                println!("Usage: ring_demo [OPTIONS]\n");
                println!("Options:");
                println!("  -s, --size <N>   Buffer capacity, >= 2 (default: 3)");
                println!("  -v, --verbose    Debug logging");
                println!("  -h, --help       Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn main() {
    let config = parse_args();

    let level = if config.verbose { "debug" } else { "warn" };
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    );

    if let Err(e) = run_demo(&config) {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}
