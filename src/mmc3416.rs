//! MMC3416 magnetometer driver
//!
//! Implements the sensor protocol on top of a [`BusTransport`]: identity
//! probe, software reset, SET/RESET offset calibration, continuous-mode
//! frequency and output-resolution configuration, single measurements with
//! milliGauss conversion, compass heading, and the diagnostic register dump.

use crate::bus::BusTransport;
use crate::error::{Mmc3416Error, Result};
use crate::registers::*;
use std::f32::consts::PI;
use std::fmt;
use std::thread;
use std::time::Duration;

/// milliGauss per LSB at 16-bit output resolution (2048 counts per Gauss)
const SENSITIVITY_MG_PER_LSB: f32 = 0.48828125;

/// Wait after starting the SET/RESET capacitor charge; datasheet asks >50 ms
const CAP_CHARGE_DELAY: Duration = Duration::from_millis(60);

/// Settle time between a SET/RESET strobe and the next measurement
const STROBE_SETTLE_DELAY: Duration = Duration::from_millis(10);

/// Sleep between data-ready status polls
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Default data-ready poll budget: 300 polls at 10 ms is three seconds
const DEFAULT_POLL_LIMIT: u32 = 300;

/// One calibrated measurement over the three axes, in milliGauss
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Measurement {
    /// Compass heading in degrees from the X/Y field components
    ///
    /// Each sign quadrant has its own arctangent formula; `declination` is
    /// the local correction between magnetic and true north in degrees.
    /// The wraparound after applying declination corrects a single period,
    /// which is sufficient for the accepted declination range of +/-30.
    pub fn heading(&self, declination: f32) -> f32 {
        let mut deg = if self.x < 0.0 {
            if self.y > 0.0 {
                // Quadrant 1
                90.0 - (self.y / -self.x).atan() * (180.0 / PI)
            } else {
                // Quadrant 2
                90.0 + (-self.y / -self.x).atan() * (180.0 / PI)
            }
        } else if self.y < 0.0 {
            // Quadrant 3
            270.0 - (-self.y / self.x).atan() * (180.0 / PI)
        } else {
            // Quadrant 4
            270.0 + (self.y / self.x).atan() * (180.0 / PI)
        };

        deg += declination;
        if declination > 0.0 {
            if deg > 360.0 {
                deg -= 360.0;
            }
        } else if deg < 0.0 {
            deg += 360.0;
        }
        deg
    }
}

/// Point-in-time snapshot of the sensor identity and configuration
#[derive(Debug, Clone, Copy)]
pub struct DeviceInfo {
    pub product_id: u8,
    pub control0: Control0,
    pub control1: Control1,
}

impl DeviceInfo {
    /// Whether the product ID matches the MMC3416xPJ
    pub fn is_mmc3416(&self) -> bool {
        self.product_id == PRODUCT_ID_MMC3416
    }

    pub fn continuous_enabled(&self) -> bool {
        self.control0.continuous
    }

    pub fn frequency(&self) -> Frequency {
        self.control0.frequency
    }

    pub fn no_boost(&self) -> bool {
        self.control0.no_boost
    }

    pub fn resolution(&self) -> Resolution {
        self.control1.resolution
    }
}

/// Raw register map image captured by [`Mmc3416::dump`]
#[derive(Debug, Clone, Copy)]
pub struct RegisterDump {
    /// Registers 0x00..=0x08
    pub sensor: [u8; SENSOR_REG_COUNT],
    /// Factory block 0x1B..=0x1F
    pub factory: [u8; FACTORY_REG_COUNT],
    /// Register 0x20
    pub product_id: u8,
}

impl fmt::Display for RegisterDump {
    /// Render the fixed-width hex map plus the per-register binary table
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------------------------------------------------------")?;
        writeln!(f, "MEMSIC MMC3416xPJ register dump:")?;
        writeln!(f, "------------------------------------------------------")?;
        writeln!(f, " reg    0  1  2  3  4  5  6  7  8  9  A  B  C  D  E  F")?;
        writeln!(f, "------------------------------------------------------")?;

        write!(f, "[0x00]")?;
        for byte in &self.sensor {
            write!(f, " {:02X}", byte)?;
        }
        writeln!(f, " -- -- -- -- -- -- --")?;

        write!(f, "[0x10] -- -- -- -- -- -- -- -- -- -- --")?;
        for byte in &self.factory {
            write!(f, " {:02X}", byte)?;
        }
        writeln!(f)?;
        writeln!(f, "[0x20] {:02X}", self.product_id)?;

        writeln!(f)?;
        writeln!(f, "Sensor Reg: hex  binary")?;
        writeln!(f, "---------------------------")?;
        for (name, byte) in SENSOR_REG_NAMES.iter().zip(self.sensor.iter()) {
            writeln!(f, "{}: 0x{:02X} 0b{:08b}", name, byte, byte)?;
        }
        Ok(())
    }
}

/// MMC3416 driver context
///
/// Owns the bus handle exclusively together with the per-session state:
/// the calibration offset established by [`calibrate`](Mmc3416::calibrate),
/// the local declination, the verbose flag and the data-ready poll budget.
pub struct Mmc3416<B> {
    bus: B,
    offset: [f32; 3],
    declination: f32,
    verbose: bool,
    poll_limit: Option<u32>,
}

impl<B: BusTransport> Mmc3416<B> {
    /// Bind the driver to a bus handle and confirm the sensor identity
    ///
    /// Reading the product ID is the only way to confirm that the slave
    /// actually answered; a zero byte means nothing is listening at the
    /// selected address.
    ///
    /// # Example
    /// ```no_run
    /// use mmc3416_interface::{LinuxI2cBus, Mmc3416};
    ///
    /// let bus = LinuxI2cBus::open("/dev/i2c-1", 0x30)?;
    /// let mut sensor = Mmc3416::new(bus)?;
    /// sensor.calibrate()?;
    /// let field = sensor.read()?;
    /// println!("X: {:.2} mG", field.x);
    /// # Ok::<(), mmc3416_interface::Mmc3416Error>(())
    /// ```
    pub fn new(bus: B) -> Result<Self> {
        let mut sensor = Mmc3416 {
            bus,
            offset: [0.0; 3],
            declination: 0.0,
            verbose: false,
            poll_limit: Some(DEFAULT_POLL_LIMIT),
        };

        let id = sensor.product_id()?;
        if id == 0 {
            return Err(Mmc3416Error::Addressing { product_id: id });
        }
        Ok(sensor)
    }

    /// Local declination in degrees, accepted range -30.0..=30.0
    pub fn set_declination(&mut self, declination: f32) -> Result<()> {
        if !(-30.0..=30.0).contains(&declination) {
            return Err(Mmc3416Error::OutOfRange(format!(
                "declination must be between -30.0 and 30.0, got {}",
                declination
            )));
        }
        self.declination = declination;
        Ok(())
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Bound the data-ready poll loop; `None` polls forever like the
    /// sensor's reference sequence and turns an unresponsive sensor into
    /// a hang.
    pub fn set_poll_limit(&mut self, limit: Option<u32>) {
        self.poll_limit = limit;
    }

    /// Calibration offset currently applied to conversions, milliGauss
    pub fn offset(&self) -> [f32; 3] {
        self.offset
    }

    /// Read the product ID register (0x06 on the MMC3416xPJ)
    pub fn product_id(&mut self) -> Result<u8> {
        self.bus.read_register(REG_PRODUCT_ID)
    }

    /// Snapshot the identity and configuration registers; no side effects
    pub fn info(&mut self) -> Result<DeviceInfo> {
        let product_id = self.product_id()?;
        let ctl0 = self.bus.read_register(REG_CONTROL_0)?;
        let ctl1 = self.bus.read_register(REG_CONTROL_1)?;
        if self.verbose {
            println!("Debug: Got ctl-0 byte: [0x{:02X}]", ctl0);
            println!("Debug: Got ctl-1 byte: [0x{:02X}]", ctl1);
        }
        Ok(DeviceInfo {
            product_id,
            control0: Control0::decode(ctl0),
            control1: Control1::decode(ctl1),
        })
    }

    /// Software-reset the sensor, clearing all configuration
    ///
    /// Terminal operation: register state is undefined afterwards until the
    /// sensor is re-initialized.
    pub fn soft_reset(&mut self) -> Result<()> {
        self.bus.write_register(REG_CONTROL_1, SW_RESET_PATTERN)?;
        if self.verbose {
            println!("Debug: Sensor SW reset complete");
        }
        Ok(())
    }

    /// Charge the SET/RESET capacitor, then strobe SET
    ///
    /// Magnetizes the sense elements in the reference direction.
    fn set_strobe(&mut self) -> Result<()> {
        self.bus.write_register(REG_CONTROL_0, 0x80)?;
        thread::sleep(CAP_CHARGE_DELAY);
        self.bus.write_register(REG_CONTROL_0, 0x20)
    }

    /// Charge the SET/RESET capacitor, then strobe RESET
    ///
    /// Reverses the magnetization 180 degrees relative to SET.
    fn reset_strobe(&mut self) -> Result<()> {
        self.bus.write_register(REG_CONTROL_0, 0x80)?;
        thread::sleep(CAP_CHARGE_DELAY);
        self.bus.write_register(REG_CONTROL_0, 0x40)
    }

    /// Establish the per-axis calibration offset with a SET/RESET cycle
    ///
    /// The sensor has no hardware offset register, so the bias is measured
    /// in software: a reading after SET carries `+H + offset`, a reading
    /// after RESET carries `-H + offset`, and averaging the two cancels the
    /// true field `H`. A final SET restores the normal polarity.
    ///
    /// Must run once per session before the first meaningful measurement.
    /// Re-running is safe and idempotent modulo sensor drift.
    pub fn calibrate(&mut self) -> Result<()> {
        self.offset = [0.0; 3];

        self.set_strobe()?;
        thread::sleep(STROBE_SETTLE_DELAY);
        let ds1 = self.read()?;

        self.reset_strobe()?;
        thread::sleep(STROBE_SETTLE_DELAY);
        let ds2 = self.read()?;

        self.offset = offset_from_pair([ds1.x, ds1.y, ds1.z], [ds2.x, ds2.y, ds2.z]);
        if self.verbose {
            for (i, value) in self.offset.iter().enumerate() {
                println!("Debug: Offset Value-{}: [{:3.2}]", i, value);
            }
        }

        self.set_strobe()
    }

    /// Set the continuous measurement frequency
    ///
    /// Skips the bus writes entirely when the requested mode already
    /// matches the current one. Otherwise enables measuring plus continuous
    /// mode, commits the new frequency bits, and reads the register back;
    /// a readback mismatch fails with `ConfigVerification` (no retry).
    pub fn set_frequency(&mut self, target: Frequency) -> Result<()> {
        let raw = self.bus.read_register(REG_CONTROL_0)?;
        let mut ctl = Control0::decode(raw);
        if self.verbose {
            println!("Debug: Cont Read Freq: [0x{:02X}]", ctl.frequency.bits());
        }

        if ctl.frequency == target {
            if self.verbose {
                println!("Debug: New freq = current freq, no change");
            }
            return Ok(());
        }

        ctl.take_measurement = true;
        ctl.continuous = true;
        ctl.frequency = target;
        ctl.set_strobe = true; // commit the new configuration
        self.bus.write_register(REG_CONTROL_0, ctl.encode())?;

        let verify = Control0::decode(self.bus.read_register(REG_CONTROL_0)?);
        if verify.frequency != target {
            return Err(Mmc3416Error::ConfigVerification {
                register: REG_CONTROL_0,
                requested: target.bits(),
                actual: verify.frequency.bits(),
            });
        }
        if self.verbose {
            println!("Debug: Update success. New mode {}", target.bits());
        }
        Ok(())
    }

    /// Set the output resolution mode in control register 1
    ///
    /// Read-modify-write with the same no-op short-circuit and readback
    /// verification as [`set_frequency`](Mmc3416::set_frequency).
    pub fn set_resolution(&mut self, target: Resolution) -> Result<()> {
        let mut ctl = Control1::decode(self.bus.read_register(REG_CONTROL_1)?);
        if ctl.resolution == target {
            return Ok(());
        }

        ctl.resolution = target;
        self.bus.write_register(REG_CONTROL_1, ctl.encode())?;

        let verify = Control1::decode(self.bus.read_register(REG_CONTROL_1)?);
        if verify.resolution != target {
            return Err(Mmc3416Error::ConfigVerification {
                register: REG_CONTROL_1,
                requested: target.bits(),
                actual: verify.resolution.bits(),
            });
        }
        Ok(())
    }

    /// Take a single measurement over the three axes
    ///
    /// Requests a one-shot measurement, polls the status register for the
    /// data-ready flag, burst-reads the six XYZ output bytes and converts
    /// them to milliGauss with the current calibration offset applied.
    pub fn read(&mut self) -> Result<Measurement> {
        self.bus.write_register(REG_CONTROL_0, 0x01)?;
        self.wait_measurement_ready()?;

        // The register pointer auto-increments across the XYZ registers
        // only, so six bytes from 0x00 is the widest legal burst.
        let mut data = [0u8; 6];
        self.bus.read_registers(REG_XOUT_LSB, &mut data)?;

        let raw_x = u16::from_le_bytes([data[0], data[1]]);
        let raw_y = u16::from_le_bytes([data[2], data[3]]);
        let raw_z = u16::from_le_bytes([data[4], data[5]]);

        let m = Measurement {
            x: SENSITIVITY_MG_PER_LSB * raw_x as f32 - self.offset[0],
            y: SENSITIVITY_MG_PER_LSB * raw_y as f32 - self.offset[1],
            z: SENSITIVITY_MG_PER_LSB * raw_z as f32 - self.offset[2],
        };
        if self.verbose {
            println!(
                "Debug: Measured value: X-[{:3.2}] Y-[{:3.2}] Z-[{:3.2}]",
                m.x, m.y, m.z
            );
        }
        Ok(m)
    }

    /// Compass heading for a measurement, with the configured declination
    pub fn heading(&self, measurement: &Measurement) -> f32 {
        measurement.heading(self.declination)
    }

    /// Capture the register map: 0x00..=0x08, the factory block
    /// 0x1B..=0x1F, and the product ID at 0x20
    ///
    /// Auto-increment does not span the status and control registers, so
    /// the map is read one register at a time.
    pub fn dump(&mut self) -> Result<RegisterDump> {
        let mut sensor = [0u8; SENSOR_REG_COUNT];
        for (i, byte) in sensor.iter_mut().enumerate() {
            *byte = self.bus.read_register(i as u8)?;
        }

        let mut factory = [0u8; FACTORY_REG_COUNT];
        for (i, byte) in factory.iter_mut().enumerate() {
            *byte = self.bus.read_register(REG_FACTORY_BASE + i as u8)?;
        }

        let product_id = self.bus.read_register(REG_PRODUCT_ID)?;
        Ok(RegisterDump {
            sensor,
            factory,
            product_id,
        })
    }

    /// Poll the status register until the measurement-done flag is set
    fn wait_measurement_ready(&mut self) -> Result<()> {
        let mut attempts = 0u32;
        loop {
            let status = self.bus.read_register(REG_STATUS)?;
            if status & STATUS_MEAS_DONE != 0 {
                return Ok(());
            }
            attempts += 1;
            if let Some(limit) = self.poll_limit {
                if attempts >= limit {
                    return Err(Mmc3416Error::Timeout { attempts });
                }
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

/// Per-axis offset from the post-SET and post-RESET readings
///
/// `ds1 = +H + offset` and `ds2 = -H + offset`, so the average isolates
/// the bias and the true field component cancels.
fn offset_from_pair(ds1: [f32; 3], ds2: [f32; 3]) -> [f32; 3] {
    let mut offset = [0.0; 3];
    for i in 0..3 {
        offset[i] = (ds1[i] + ds2[i]) / 2.0;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// In-memory register image implementing `BusTransport`
    struct MockBus {
        regs: [u8; 0x21],
        writes: Vec<(u8, u8)>,
        /// Raw 6-byte data frames served for XYZ burst reads, in order
        frames: VecDeque<[u8; 6]>,
        /// Record writes without applying them (stuck configuration)
        drop_writes: bool,
    }

    impl MockBus {
        fn new() -> Self {
            let mut regs = [0u8; 0x21];
            regs[REG_PRODUCT_ID as usize] = PRODUCT_ID_MMC3416;
            regs[REG_STATUS as usize] = STATUS_MEAS_DONE;
            MockBus {
                regs,
                writes: Vec::new(),
                frames: VecDeque::new(),
                drop_writes: false,
            }
        }

        fn push_frame(&mut self, raw: [u16; 3]) {
            let mut frame = [0u8; 6];
            for (i, value) in raw.iter().enumerate() {
                let bytes = value.to_le_bytes();
                frame[2 * i] = bytes[0];
                frame[2 * i + 1] = bytes[1];
            }
            self.frames.push_back(frame);
        }
    }

    impl BusTransport for MockBus {
        fn write_register(&mut self, reg: u8, value: u8) -> Result<()> {
            self.writes.push((reg, value));
            if !self.drop_writes {
                self.regs[reg as usize] = value;
            }
            Ok(())
        }

        fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<()> {
            if reg == REG_XOUT_LSB && buf.len() == 6 {
                if let Some(frame) = self.frames.pop_front() {
                    buf.copy_from_slice(&frame);
                    return Ok(());
                }
            }
            for (i, byte) in buf.iter_mut().enumerate() {
                *byte = self.regs[reg as usize + i];
            }
            Ok(())
        }
    }

    fn sensor() -> Mmc3416<MockBus> {
        Mmc3416::new(MockBus::new()).unwrap()
    }

    #[test]
    fn bind_fails_without_identity() {
        let mut bus = MockBus::new();
        bus.regs[REG_PRODUCT_ID as usize] = 0;
        assert!(matches!(
            Mmc3416::new(bus),
            Err(Mmc3416Error::Addressing { product_id: 0 })
        ));
    }

    #[test]
    fn frequency_noop_performs_no_writes() {
        let mut sensor = sensor();
        sensor.bus.regs[REG_CONTROL_0 as usize] = 0x08; // mode 2 in bits 2-3
        sensor.set_frequency(Frequency::Hz25).unwrap();
        assert!(sensor.bus.writes.is_empty());
    }

    #[test]
    fn frequency_update_sets_mode_and_enable_bits() {
        let mut sensor = sensor();
        sensor.set_frequency(Frequency::Hz50).unwrap();
        // start measuring + continuous + mode 3 + commit
        assert_eq!(sensor.bus.writes, vec![(REG_CONTROL_0, 0x2F)]);
        let info = sensor.info().unwrap();
        assert_eq!(info.frequency(), Frequency::Hz50);
        assert!(info.continuous_enabled());
    }

    #[test]
    fn frequency_readback_mismatch_is_an_error() {
        let mut sensor = sensor();
        sensor.bus.drop_writes = true;
        let err = sensor.set_frequency(Frequency::Hz13).unwrap_err();
        assert!(matches!(
            err,
            Mmc3416Error::ConfigVerification {
                register: REG_CONTROL_0,
                requested: 1,
                actual: 0,
            }
        ));
    }

    #[test]
    fn resolution_update_preserves_unrelated_bits() {
        let mut sensor = sensor();
        sensor.bus.regs[REG_CONTROL_1 as usize] = 0x80;
        sensor.set_resolution(Resolution::Bits14).unwrap();
        assert_eq!(sensor.bus.writes, vec![(REG_CONTROL_1, 0x82)]);
        assert_eq!(sensor.info().unwrap().resolution(), Resolution::Bits14);
    }

    #[test]
    fn offset_is_the_mean_of_set_and_reset_readings() {
        let offset = offset_from_pair([10.0, 20.0, 5.0], [-4.0, -10.0, -1.0]);
        assert_eq!(offset, [3.0, 5.0, 2.0]);
    }

    #[test]
    fn raw_conversion_uses_datasheet_sensitivity() {
        let mut sensor = sensor();
        sensor.bus.push_frame([2048, 2048, 2048]);
        let m = sensor.read().unwrap();
        assert!((m.x - 1000.0).abs() < 1e-3);
        assert!((m.y - 1000.0).abs() < 1e-3);
        assert!((m.z - 1000.0).abs() < 1e-3);
        // The one-shot trigger must have been written first.
        assert_eq!(sensor.bus.writes[0], (REG_CONTROL_0, 0x01));
    }

    #[test]
    fn calibrate_measures_and_subtracts_the_bias() {
        let mut sensor = sensor();
        // ds1 = 1000 mG per axis, ds2 = 0 mG per axis => offset 500 mG
        sensor.bus.push_frame([2048, 2048, 2048]);
        sensor.bus.push_frame([0, 0, 0]);
        sensor.calibrate().unwrap();
        for axis in sensor.offset() {
            assert!((axis - 500.0).abs() < 1e-3);
        }

        // Subsequent reads subtract the offset.
        sensor.bus.push_frame([2048, 2048, 2048]);
        let m = sensor.read().unwrap();
        assert!((m.x - 500.0).abs() < 1e-3);

        // SET, read, RESET, read, SET: strobes in protocol order.
        let ctl0: Vec<u8> = sensor
            .bus
            .writes
            .iter()
            .filter(|(reg, _)| *reg == REG_CONTROL_0)
            .map(|(_, value)| *value)
            .collect();
        assert_eq!(ctl0[..4], [0x80, 0x20, 0x01, 0x80]);
        assert_eq!(ctl0[4..7], [0x40, 0x01, 0x80]);
        assert_eq!(ctl0[7], 0x20);
    }

    #[test]
    fn stuck_status_register_times_out() {
        let mut sensor = sensor();
        sensor.bus.regs[REG_STATUS as usize] = 0;
        sensor.set_poll_limit(Some(2));
        assert!(matches!(
            sensor.read(),
            Err(Mmc3416Error::Timeout { attempts: 2 })
        ));
    }

    #[test]
    fn heading_quadrant_boundaries() {
        let q1 = Measurement {
            x: -1.0,
            y: 1.0,
            z: 0.0,
        };
        assert!((q1.heading(0.0) - 45.0).abs() < 0.1);

        let q4 = Measurement {
            x: 1.0,
            y: 1.0,
            z: 0.0,
        };
        assert!((q4.heading(0.0) - 315.0).abs() < 0.1);
    }

    #[test]
    fn heading_declination_wraparound_is_single_step() {
        // Quadrant 4 at ~350 degrees: 270 + atan(tan(80)) = 350.
        let high = Measurement {
            x: 1.0,
            y: 80.0f32.to_radians().tan(),
            z: 0.0,
        };
        assert!((high.heading(0.0) - 350.0).abs() < 0.1);
        assert!((high.heading(20.0) - 10.0).abs() < 0.1);

        // Quadrant 1 at ~10 degrees: 90 - atan(tan(80)) = 10.
        let low = Measurement {
            x: -1.0,
            y: 80.0f32.to_radians().tan(),
            z: 0.0,
        };
        assert!((low.heading(0.0) - 10.0).abs() < 0.1);
        assert!((low.heading(-20.0) - 350.0).abs() < 0.1);
    }

    #[test]
    fn declination_range_is_checked() {
        let mut sensor = sensor();
        assert!(sensor.set_declination(7.73).is_ok());
        assert!(sensor.set_declination(-30.0).is_ok());
        assert!(matches!(
            sensor.set_declination(30.5),
            Err(Mmc3416Error::OutOfRange(_))
        ));
    }

    #[test]
    fn dump_places_every_byte_at_its_documented_address() {
        let mut sensor = sensor();
        for (i, value) in (0x11..=0x19).enumerate() {
            sensor.bus.regs[i] = value;
        }
        for (i, value) in (0x21..=0x25).enumerate() {
            sensor.bus.regs[REG_FACTORY_BASE as usize + i] = value;
        }

        let dump = sensor.dump().unwrap();
        assert_eq!(dump.sensor, [0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19]);
        assert_eq!(dump.factory, [0x21, 0x22, 0x23, 0x24, 0x25]);
        assert_eq!(dump.product_id, PRODUCT_ID_MMC3416);

        let table = dump.to_string();
        assert!(table.contains("  Xout Low: 0x11 0b00010001"));
        assert!(table.contains("    Status: 0x17 0b00010111"));
        assert!(table.contains(" Control-1: 0x19 0b00011001"));
        assert!(table.contains("[0x20] 06"));
    }
}
