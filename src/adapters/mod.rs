//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements     | Connects to                  |
//! |---------------|----------------|------------------------------|
//! | `hardware`    | SensorPort     | DHT22 (GPIO15), MQ-135 (ADC1)|
//! |               | IndicatorPort  | Red / green LEDs (GPIO13/12) |
//! | `serial_sink` | EventSink      | UART0 console (JSON / text)  |
//! | `time`        | ClockPort      | ESP32 system timer           |

pub mod hardware;
pub mod serial_sink;
pub mod time;
