//! Fifo Buffer Demo
//!
//! Walkthrough FifoBuffer<i32>: pop saat kosong, push sampai penuh,
//! drain, lalu pop lewat reference.
//!
//! Usage:
//!   cargo run --bin fifo_demo [OPTIONS]

use circbuf::{BufferError, FifoBuffer};

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

fn outcome<T>(result: &Result<T, BufferError>) -> String {
    match result {
        Ok(_) => "ok".to_string(),
        Err(e) => format!("failed ({})", e),
    }
}

fn run_demo(config: &DemoConfig) -> Result<(), BufferError> {
    let size = config.size;
    let mut buf: FifoBuffer<i32> = FifoBuffer::create_empty();

    println!("Allocating fifobuffer of size: {}", size);
    buf.allocate(size)?;

    println!("testing read of empty buffer, pop should fail");
    println!("pop: {}", outcome(&buf.pop()));
    println!("available returned: {}", buf.available()?);

    println!("adding 1 to the buffer");
    buf.push(1)?;
    println!("available returned: {}", buf.available()?);
    println!("popping 1 from buffer");
    println!("pop read out: {}", buf.pop()?);
    println!("available returned: {}", buf.available()?);

    println!("popping on empty buffer, should fail");
    println!("pop: {}", outcome(&buf.pop()));

    let last = size as i32 + 1;
    println!("adding 2..={} to the buffer", last);
    for v in 2..=last {
        buf.push(v)?;
    }

    println!("try pushing {}, should fail since it's full", last + 1);
    println!("push: {}", outcome(&buf.push(last + 1)));
    println!("available returned: {}", buf.available()?);

    println!("popping all {} from buffer", size);
    let drained: Vec<String> = (0..size)
        .map(|_| buf.pop().map(|v| v.to_string()))
        .collect::<Result<_, _>>()?;
    println!("{}", drained.join(" "));
    println!("available returned: {}", buf.available()?);

    println!("adding 5,6 to the buffer");
    buf.push(5)?;
    buf.push(6)?;
    println!("available returned: {}", buf.available()?);
    while !buf.is_empty() {
        println!("popped by reference: {}", *buf.pop_ref()?);
        println!("available returned: {}", buf.available()?);
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
                println!("Fifo Buffer Demo\n");
                println!("Usage: fifo_demo [OPTIONS]\n");
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
