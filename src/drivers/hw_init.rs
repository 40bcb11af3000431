//! One-shot hardware peripheral initialization.
//!
//! Configures the MQ-135 ADC channel and the two indicator GPIOs using raw
//! ESP-IDF sys calls.  The DHT22 data line is owned by an `esp-idf-hal`
//! `PinDriver` built in `main()`.  Called once before the sampling loop.

#[cfg(feature = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(feature = "espidf")]
use log::info;

#[cfg(feature = "espidf")]
use crate::pins;

/// ADC1 channel wired to the MQ-135 analog output (GPIO34).
pub const ADC1_CH_MQ135: u32 = 6;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc) => write!(f, "ADC1 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

#[cfg(feature = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the sampling loop; single-threaded.
    unsafe {
        init_adc()?;
        init_gpio_outputs()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(feature = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(feature = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Only the init path writes the handle; afterwards it is read from
/// the main loop alone.
#[cfg(feature = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(feature = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::AdcInitFailed(ret));
    }

    // 12 dB attenuation: full 0-3.3 V swing of the MQ-135 module.
    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };
    let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), ADC1_CH_MQ135, &chan_cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::AdcInitFailed(ret));
    }

    info!(
        "hw_init: ADC1 configured (CH{}=MQ-135 on GPIO{})",
        ADC1_CH_MQ135,
        pins::MQ135_ADC_GPIO
    );
    Ok(())
}

/// Raw 12-bit conversion, `0` if the driver reports an error.
#[cfg(feature = "espidf")]
pub fn adc1_read(channel: u32) -> u16 {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract, main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        log::debug!("adc1_read(ch{}) failed rc={}", channel, ret);
        return 0;
    }
    raw.clamp(0, 4095) as u16
}

/// Host stand-in for the converter: one injectable value per ADC1 channel.
#[cfg(not(feature = "espidf"))]
static SIM_ADC1: [core::sync::atomic::AtomicU16; 10] =
    [const { core::sync::atomic::AtomicU16::new(0) }; 10];

#[cfg(not(feature = "espidf"))]
pub fn sim_set_adc1(channel: u32, raw: u16) {
    if let Some(slot) = SIM_ADC1.get(channel as usize) {
        slot.store(raw.min(4095), core::sync::atomic::Ordering::Relaxed);
    }
}

#[cfg(not(feature = "espidf"))]
pub fn adc1_read(channel: u32) -> u16 {
    SIM_ADC1
        .get(channel as usize)
        .map_or(0, |slot| slot.load(core::sync::atomic::Ordering::Relaxed))
}

// ── GPIO Outputs ──────────────────────────────────────────────

#[cfg(feature = "espidf")]
unsafe fn init_gpio_outputs() -> Result<(), HwInitError> {
    let output_pins = [pins::LED_ALERT_GPIO, pins::LED_OK_GPIO];

    for &pin in &output_pins {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: indicator GPIOs configured (both off)");
    Ok(())
}

#[cfg(feature = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: pin was configured as an output in init_gpio_outputs().
    unsafe {
        gpio_set_level(pin, u32::from(high));
    }
}

#[cfg(not(feature = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_init_succeeds() {
        assert_eq!(init_peripherals(), Ok(()));
    }

    #[test]
    fn sim_adc_is_per_channel_and_clamped() {
        sim_set_adc1(9, 5000);
        assert_eq!(adc1_read(9), 4095);
        assert_eq!(adc1_read(8), 0);
        assert_eq!(adc1_read(42), 0);
    }

    #[test]
    fn error_display_carries_return_code() {
        assert_eq!(
            HwInitError::GpioConfigFailed(259).to_string(),
            "GPIO config failed (rc=259)"
        );
    }
}
