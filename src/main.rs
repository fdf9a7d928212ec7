//! MMC3416 sensor control and data extraction tool
//!
//! Command-line driver for the MEMSIC MMC3416 magnetic field sensor on a
//! Linux I2C bus. One operation per invocation: register dump, sensor
//! information, software reset, output resolution, single measurement with
//! compass heading, or continuous-mode configuration.
//!
//! Usage examples:
//!   mmc3416-reader -b /dev/i2c-0 -i
//!   mmc3416-reader -t -v
//!   mmc3416-reader -c 1
//!   mmc3416-reader -t -l 7.73 -o ./mmc3416.htm

use chrono::{DateTime, Local};
use clap::{ArgGroup, Parser};
use mmc3416_interface::{
    report, DeviceInfo, Frequency, LinuxI2cBus, Mmc3416, Mmc3416Error, Resolution, DEFAULT_BUS,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "mmc3416-reader")]
#[command(about = "Control and read the MEMSIC MMC3416 magnetic field sensor", long_about = None)]
#[command(group(
    ArgGroup::new("command")
        .required(true)
        .args(["continuous", "dump", "info", "resolution", "reset", "single"]),
))]
struct Args {
    /// I2C bus device to query
    #[arg(short, long, default_value = DEFAULT_BUS)]
    bus: String,

    /// Sensor I2C address (hex accepted, e.g. 0x30)
    #[arg(short, long, default_value = "0x30", value_parser = parse_address)]
    address: u16,

    /// Start continuous read with the given frequency mode
    /// (0 = 1.5 Hz, 1 = 13 Hz, 2 = 25 Hz, 3 = 50 Hz)
    #[arg(short, long, value_name = "MODE", value_parser = clap::value_parser!(u8).range(0..=3))]
    continuous: Option<u8>,

    /// Dump the complete sensor register map content
    #[arg(short, long)]
    dump: bool,

    /// Print sensor information
    #[arg(short, long)]
    info: bool,

    /// Local declination offset in degrees, -30..30 (used with -t),
    /// see http://www.ngdc.noaa.gov/geomag-web/#declination
    #[arg(short = 'l', long, default_value_t = 0.0, value_parser = parse_declination)]
    declination: f32,

    /// Set the sensor output resolution mode: 12, 14, 16 or 16h
    #[arg(short = 'm', long, value_name = "MODE", value_parser = parse_resolution)]
    resolution: Option<Resolution>,

    /// Reset the sensor, clearing all configuration
    #[arg(short, long)]
    reset: bool,

    /// Take a single measurement
    #[arg(short = 't', long = "single")]
    single: bool,

    /// Write measurement results to an HTML table file (used with -t)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Keep reading until Ctrl+C after configuring continuous mode (used with -c)
    #[arg(short, long)]
    watch: bool,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

/// Parse a 7-bit slave address, accepting `0x` hex or decimal
fn parse_address(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    match parsed {
        Ok(address) if address <= 0x7F => Ok(address),
        Ok(address) => Err(format!("address 0x{:02X} is not a 7-bit address", address)),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_declination(s: &str) -> Result<f32, String> {
    let declination: f32 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if !(-30.0..=30.0).contains(&declination) {
        return Err(format!(
            "declination must be between -30.0 and 30.0, got {}",
            declination
        ));
    }
    Ok(declination)
}

fn parse_resolution(s: &str) -> Result<Resolution, String> {
    s.parse().map_err(|e: Mmc3416Error| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let now = Local::now();

    if args.verbose {
        println!(
            "Debug: ts=[{}] date={}",
            now.timestamp(),
            now.format("%a %b %e %H:%M:%S %Y")
        );
        println!("Debug: I2C bus device: [{}]", args.bus);
        println!("Debug: Sensor address: [0x{:02X}]", args.address);
    }

    let bus = match LinuxI2cBus::open(&args.bus, args.address) {
        Ok(bus) => bus,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Please check:");
            eprintln!("  1. The bus device exists (ls /dev/i2c-*)");
            eprintln!("  2. The I2C interface is enabled on this board");
            eprintln!("  3. Your user has permission to access the device");
            return Err(Box::new(e));
        }
    };

    let mut sensor = match Mmc3416::new(bus) {
        Ok(sensor) => sensor,
        Err(e @ Mmc3416Error::Addressing { .. }) => {
            eprintln!("Error: {}", e);
            eprintln!("Please check:");
            eprintln!("  1. The sensor is wired to the SDA/SCL pins of [{}]", args.bus);
            eprintln!(
                "  2. The sensor answers at address 0x{:02X} (try i2cdetect)",
                args.address
            );
            return Err(Box::new(e));
        }
        Err(e) => return Err(Box::new(e)),
    };
    sensor.set_verbose(args.verbose);
    sensor.set_declination(args.declination)?;

    if args.dump {
        print!("{}", sensor.dump()?);
    } else if args.info {
        print_info(&sensor.info()?, now);
    } else if args.reset {
        sensor.soft_reset()?;
        println!("Sensor SW reset complete");
    } else if let Some(mode) = args.resolution {
        sensor.set_resolution(mode)?;
        println!("Output resolution set: {}", mode);
    } else if args.single {
        single_measurement(&mut sensor, &args, now)?;
    } else if let Some(mode) = args.continuous {
        let frequency = Frequency::try_from(mode)?;
        continuous_read(&mut sensor, frequency, args.watch)?;
    }

    Ok(())
}

/// `-i` output block: identity plus the decoded configuration registers
fn print_info(info: &DeviceInfo, now: DateTime<Local>) {
    println!("----------------------------------------------");
    println!("MMC3416 Information {}", now.format("%a %b %e %H:%M:%S %Y"));
    println!("----------------------------------------------");

    print!("    Sensor Product ID = 0x{:02X} ", info.product_id);
    if info.is_mmc3416() {
        println!("MEMSIC MMC3416xPJ");
    } else {
        println!("Product ID unknown");
    }

    println!(
        "Continuous Read State = 0x{:02X} {}",
        info.continuous_enabled() as u8,
        if info.continuous_enabled() {
            "Enabled"
        } else {
            "Disabled"
        }
    );
    println!(
        "Continuous Read Freq. = 0x{:02X} {}",
        info.frequency().bits(),
        info.frequency()
    );
    println!(
        "No Boost CAP charging = 0x{:02X} {}",
        info.no_boost() as u8,
        if info.no_boost() {
            "CAP charged from VDD"
        } else {
            "CAP charge pump enabled"
        }
    );
    println!(
        "    Output Resolution = 0x{:02X} {}",
        info.resolution().bits(),
        info.resolution()
    );
}

/// `-t`: calibrate, read once, print the heading line, optionally write
/// the HTML report
fn single_measurement(
    sensor: &mut Mmc3416<LinuxI2cBus>,
    args: &Args,
    now: DateTime<Local>,
) -> Result<(), Mmc3416Error> {
    sensor.calibrate()?;
    let field = sensor.read()?;
    let angle = sensor.heading(&field);

    // The sensor is accurate to about one degree, one fraction digit is
    // plenty for the heading.
    println!("{} Heading={:.1} degrees", now.timestamp(), angle);

    if let Some(path) = &args.output {
        report::write_html(path, now, &field, angle)?;
        if args.verbose {
            println!("Debug: wrote report file [{}]", path.display());
        }
    }
    Ok(())
}

/// `-c`: configure the continuous frequency; with `-w`, keep printing
/// samples at roughly that rate until Ctrl+C
fn continuous_read(
    sensor: &mut Mmc3416<LinuxI2cBus>,
    frequency: Frequency,
    watch: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if watch {
        sensor.calibrate()?;
    }
    sensor.set_frequency(frequency)?;
    println!("Continuous read enabled: {}", frequency);

    if !watch {
        return Ok(());
    }

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;

    let interval = Duration::from_secs_f32(1.0 / frequency.hz());
    println!("Press Ctrl+C to stop");
    while running.load(Ordering::SeqCst) {
        let field = sensor.read()?;
        let angle = sensor.heading(&field);
        println!(
            "{} X={:.2} Y={:.2} Z={:.2} mG Heading={:.1} degrees",
            Local::now().timestamp(),
            field.x,
            field.y,
            field.z,
            angle
        );
        thread::sleep(interval);
    }
    Ok(())
}
