//! High-level command wrappers
//!
//! One method per LSCP operation: each formats a single protocol line,
//! exchanges it via [`LscpClient::query`] and converts the reply into a
//! typed value (count, index list, parameter map, or acknowledgment).

use crate::client::LscpClient;
use crate::error::{LscpError, Result};
use crate::protocol::{escape, parse_params, Outcome, ParamMap, ParamValue};

impl LscpClient {
    // -------------------------------------------------------------------------
    // Server / Engines
    // -------------------------------------------------------------------------

    /// General information about the server (`description`, `version`, ...)
    pub fn get_server_info(&mut self) -> Result<ParamMap> {
        self.query_params("GET SERVER INFO")
    }

    /// Number of available sampler engines
    pub fn get_available_engines(&mut self) -> Result<u32> {
        self.query_count("GET AVAILABLE_ENGINES")
    }

    /// Names of available sampler engines
    pub fn list_available_engines(&mut self) -> Result<Vec<String>> {
        let line = self.query("LIST AVAILABLE_ENGINES", false)?.expect_line()?;
        Ok(line
            .split(',')
            .filter(|name| !name.is_empty())
            .map(|name| name.trim_matches('\'').to_string())
            .collect())
    }

    /// Detailed information about the given sampler engine
    pub fn get_engine_info(&mut self, engine: &str) -> Result<ParamMap> {
        self.query_params(&format!("GET ENGINE INFO {engine}"))
    }

    /// Reset the whole sampler instance
    pub fn reset(&mut self) -> Result<Outcome> {
        self.query("RESET", false)
    }

    // -------------------------------------------------------------------------
    // Sampler Channels
    // -------------------------------------------------------------------------

    /// Number of sampler channels
    pub fn get_channels(&mut self) -> Result<u32> {
        self.query_count("GET CHANNELS")
    }

    /// Numeric identifiers of all sampler channels
    pub fn list_channels(&mut self) -> Result<Vec<u32>> {
        self.query_index_list("LIST CHANNELS")
    }

    /// Add a new sampler channel; returns the index of the created channel
    pub fn add_channel(&mut self) -> Result<u32> {
        self.query("ADD CHANNEL", false)?.expect_index()
    }

    /// Remove the sampler channel with the given index
    pub fn remove_channel(&mut self, channel: u32) -> Result<Outcome> {
        self.query(&format!("REMOVE CHANNEL {channel}"), false)
    }

    /// Load a sampler engine onto the given channel
    pub fn load_engine(&mut self, engine: &str, channel: u32) -> Result<Outcome> {
        self.query(&format!("LOAD ENGINE {engine} {channel}"), false)
    }

    /// Load an instrument from `filename` onto the given channel.
    ///
    /// The file name is escaped for the wire. With `non_modal` the server
    /// acknowledges immediately and loads in the background.
    pub fn load_instrument(
        &mut self,
        filename: &str,
        index: u32,
        channel: u32,
        non_modal: bool,
    ) -> Result<Outcome> {
        let modal = if non_modal { " NON_MODAL" } else { "" };
        let filename = escape(filename)?;
        self.query(
            &format!("LOAD INSTRUMENT{modal} '{filename}' {index} {channel}"),
            false,
        )
    }

    // -------------------------------------------------------------------------
    // Audio Output
    // -------------------------------------------------------------------------

    /// Number of available audio output drivers
    pub fn get_available_audio_output_drivers(&mut self) -> Result<u32> {
        self.query_count("GET AVAILABLE_AUDIO_OUTPUT_DRIVERS")
    }

    /// Names of available audio output drivers
    pub fn list_available_audio_output_drivers(&mut self) -> Result<Vec<String>> {
        let line = self
            .query("LIST AVAILABLE_AUDIO_OUTPUT_DRIVERS", false)?
            .expect_line()?;
        Ok(line.split(',').map(str::to_string).collect())
    }

    /// Detailed information about the given audio output driver
    pub fn get_audio_output_driver_info(&mut self, driver: &str) -> Result<ParamMap> {
        self.query_params(&format!("GET AUDIO_OUTPUT_DRIVER INFO {driver}"))
    }

    /// Detailed information about one driver parameter.
    ///
    /// `deps` carries values for parameters this one depends on, appended as
    /// `KEY=VALUE` pairs.
    pub fn get_audio_output_driver_param_info(
        &mut self,
        driver: &str,
        param: &str,
        deps: &[(&str, ParamValue)],
    ) -> Result<ParamMap> {
        let deps = format_keyvalue_args(deps);
        self.query_params(&format!(
            "GET AUDIO_OUTPUT_DRIVER_PARAMETER INFO {driver} {}{deps}",
            param.to_uppercase()
        ))
    }

    /// Create an audio output device; returns the index of the new device
    pub fn create_audio_output_device(
        &mut self,
        driver: &str,
        params: &[(&str, ParamValue)],
    ) -> Result<u32> {
        let params = format_keyvalue_args(params);
        self.query(&format!("CREATE AUDIO_OUTPUT_DEVICE {driver}{params}"), false)?
            .expect_index()
    }

    /// Destroy the audio output device with the given index
    pub fn destroy_audio_output_device(&mut self, index: u32) -> Result<Outcome> {
        self.query(&format!("DESTROY AUDIO_OUTPUT_DEVICE {index}"), false)
    }

    /// Number of created audio output devices
    pub fn get_audio_output_devices(&mut self) -> Result<u32> {
        self.query_count("GET AUDIO_OUTPUT_DEVICES")
    }

    /// Numeric identifiers of all created audio output devices
    pub fn list_audio_output_devices(&mut self) -> Result<Vec<u32>> {
        self.query_index_list("LIST AUDIO_OUTPUT_DEVICES")
    }

    /// Current settings of the given audio output device
    pub fn get_audio_output_device_info(&mut self, index: u32) -> Result<ParamMap> {
        self.query_params(&format!("GET AUDIO_OUTPUT_DEVICE INFO {index}"))
    }

    /// Alter one parameter of an audio output device
    pub fn set_audio_output_device_param(
        &mut self,
        index: u32,
        param: &str,
        value: ParamValue,
    ) -> Result<Outcome> {
        self.query(
            &format!(
                "SET AUDIO_OUTPUT_DEVICE_PARAMETER {index} {}={}",
                param.to_uppercase(),
                format_arg(&value)
            ),
            false,
        )
    }

    /// Information about one channel of an audio output device
    pub fn get_audio_output_channel_info(&mut self, index: u32, channel: u32) -> Result<ParamMap> {
        self.query_params(&format!("GET AUDIO_OUTPUT_CHANNEL INFO {index} {channel}"))
    }

    /// Information about one audio output channel parameter
    pub fn get_audio_output_channel_param_info(
        &mut self,
        index: u32,
        channel: u32,
        param: &str,
    ) -> Result<ParamMap> {
        self.query_params(&format!(
            "GET AUDIO_OUTPUT_CHANNEL_PARAMETER INFO {index} {channel} {}",
            param.to_uppercase()
        ))
    }

    /// Alter one parameter of an audio output channel
    pub fn set_audio_output_channel_param(
        &mut self,
        index: u32,
        channel: u32,
        param: &str,
        value: ParamValue,
    ) -> Result<Outcome> {
        self.query(
            &format!(
                "SET AUDIO_OUTPUT_CHANNEL_PARAMETER {index} {channel} {}={}",
                param.to_uppercase(),
                format_arg(&value)
            ),
            false,
        )
    }

    // -------------------------------------------------------------------------
    // MIDI Input
    // -------------------------------------------------------------------------

    /// Number of available MIDI input drivers
    pub fn get_available_midi_input_drivers(&mut self) -> Result<u32> {
        self.query_count("GET AVAILABLE_MIDI_INPUT_DRIVERS")
    }

    /// Names of available MIDI input drivers
    pub fn list_available_midi_input_drivers(&mut self) -> Result<Vec<String>> {
        let line = self
            .query("LIST AVAILABLE_MIDI_INPUT_DRIVERS", false)?
            .expect_line()?;
        Ok(line.split(',').map(str::to_string).collect())
    }

    /// Detailed information about the given MIDI input driver
    pub fn get_midi_input_driver_info(&mut self, driver: &str) -> Result<ParamMap> {
        self.query_params(&format!("GET MIDI_INPUT_DRIVER INFO {driver}"))
    }

    /// Detailed information about one MIDI input driver parameter
    pub fn get_midi_input_driver_param_info(
        &mut self,
        driver: &str,
        param: &str,
        deps: &[(&str, ParamValue)],
    ) -> Result<ParamMap> {
        let deps = format_keyvalue_args(deps);
        self.query_params(&format!(
            "GET MIDI_INPUT_DRIVER_PARAMETER INFO {driver} {}{deps}",
            param.to_uppercase()
        ))
    }

    /// Create a MIDI input device; returns the index of the new device
    pub fn create_midi_input_device(
        &mut self,
        driver: &str,
        params: &[(&str, ParamValue)],
    ) -> Result<u32> {
        let params = format_keyvalue_args(params);
        self.query(&format!("CREATE MIDI_INPUT_DEVICE {driver}{params}"), false)?
            .expect_index()
    }

    /// Destroy the MIDI input device with the given index
    pub fn destroy_midi_input_device(&mut self, index: u32) -> Result<Outcome> {
        self.query(&format!("DESTROY MIDI_INPUT_DEVICE {index}"), false)
    }

    /// Number of created MIDI input devices
    pub fn get_midi_input_devices(&mut self) -> Result<u32> {
        self.query_count("GET MIDI_INPUT_DEVICES")
    }

    /// Numeric identifiers of all created MIDI input devices
    pub fn list_midi_input_devices(&mut self) -> Result<Vec<u32>> {
        self.query_index_list("LIST MIDI_INPUT_DEVICES")
    }

    /// Current settings of the given MIDI input device
    pub fn get_midi_input_device_info(&mut self, index: u32) -> Result<ParamMap> {
        self.query_params(&format!("GET MIDI_INPUT_DEVICE INFO {index}"))
    }

    /// Alter one parameter of a MIDI input device
    pub fn set_midi_input_device_param(
        &mut self,
        index: u32,
        param: &str,
        value: ParamValue,
    ) -> Result<Outcome> {
        self.query(
            &format!(
                "SET MIDI_INPUT_DEVICE_PARAMETER {index} {}={}",
                param.to_uppercase(),
                format_arg(&value)
            ),
            false,
        )
    }

    /// Information about one port of a MIDI input device
    pub fn get_midi_input_port_info(&mut self, index: u32, port: u32) -> Result<ParamMap> {
        self.query_params(&format!("GET MIDI_INPUT_PORT INFO {index} {port}"))
    }

    /// Alter one parameter of a MIDI input port
    pub fn set_midi_input_port_param(
        &mut self,
        index: u32,
        port: u32,
        param: &str,
        value: ParamValue,
    ) -> Result<Outcome> {
        self.query(
            &format!(
                "SET MIDI_INPUT_PORT_PARAMETER {index} {port} {}={}",
                param.to_uppercase(),
                format_arg(&value)
            ),
            false,
        )
    }

    // -------------------------------------------------------------------------
    // Shared reply shapes
    // -------------------------------------------------------------------------

    /// Exchange a multi-line query and decode the body as a parameter block
    fn query_params(&mut self, command: &str) -> Result<ParamMap> {
        let lines = self.query(command, true)?.expect_lines()?;
        parse_params(lines)
    }

    /// Exchange a query whose reply is a single non-negative count
    fn query_count(&mut self, command: &str) -> Result<u32> {
        let line = self.query(command, false)?.expect_line()?;
        line.parse()
            .map_err(|e| LscpError::Parse(format!("invalid count {line:?}: {e}")))
    }

    /// Exchange a query whose reply is a comma-separated list of indices
    fn query_index_list(&mut self, command: &str) -> Result<Vec<u32>> {
        let line = self.query(command, false)?.expect_line()?;
        line.split(',')
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse()
                    .map_err(|e| LscpError::Parse(format!("invalid index {part:?}: {e}")))
            })
            .collect()
    }
}

/// Render ` KEY=VALUE` argument pairs for device/parameter commands.
///
/// Names are uppercased; string values are single-quoted, everything else is
/// rendered plainly.
fn format_keyvalue_args(pairs: &[(&str, ParamValue)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!(" {}={}", name.to_uppercase(), format_arg(value)))
        .collect()
}

/// Render a single argument value for the wire
fn format_arg(value: &ParamValue) -> String {
    match value {
        ParamValue::Str(s) => format!("'{s}'"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyvalue_args_quote_strings() {
        let args = format_keyvalue_args(&[
            ("card", ParamValue::Str("0".to_string())),
            ("channels", ParamValue::Int(2)),
            ("active", ParamValue::Bool(true)),
        ]);
        assert_eq!(args, " CARD='0' CHANNELS=2 ACTIVE=true");
    }

    #[test]
    fn keyvalue_args_empty() {
        assert_eq!(format_keyvalue_args(&[]), "");
    }
}
