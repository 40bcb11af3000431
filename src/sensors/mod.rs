//! Sensor drivers: DHT22 (temperature, humidity) and MQ-135 (air quality).

pub mod dht22;
pub mod mq135;
