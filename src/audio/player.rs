use anyhow::{anyhow, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossbeam_channel::{bounded, Sender};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::tone::render_tone;
use crate::config::ToneConfig;
use crate::types::waveform::Waveform;

/// List available audio output devices
pub fn list_audio_devices() -> Result<Vec<String>> {
    let host = cpal::default_host();

    let mut devices: Vec<String> = host
        .output_devices()?
        .filter_map(|device| {
            device.description()
                .ok()
                .map(|desc| desc.name().to_string())
        })
        .collect();

    // Also try to get the default device explicitly
    if let Some(default_device) = host.default_output_device() {
        if let Ok(default_desc) = default_device.description() {
            let default_name = default_desc.name().to_string();
            if !devices.contains(&default_name) {
                devices.push(default_name);
            }
        }
    }

    if devices.is_empty() {
        return Err(anyhow!("No audio output devices found"));
    }

    Ok(devices)
}

/// Find audio device index by name or index string
pub fn find_audio_device(devices: &[String], search: &str) -> Result<usize> {
    if let Ok(index) = search.parse::<usize>() {
        if index < devices.len() {
            return Ok(index);
        } else {
            return Err(anyhow!(
                "Audio device index {} out of range (0-{})",
                index,
                devices.len().saturating_sub(1)
            ));
        }
    }

    // Case-insensitive substring match
    let search_lower = search.to_lowercase();
    devices
        .iter()
        .position(|device| device.to_lowercase().contains(&search_lower))
        .ok_or_else(|| anyhow!("Audio device '{}' not found", search))
}

/// Resolve the configured output device, falling back to the host default
fn open_device(search: Option<&str>) -> Result<cpal::Device> {
    let host = cpal::default_host();

    match search {
        Some(search) => {
            let devices = list_audio_devices()?;
            let index = find_audio_device(&devices, search)?;
            host.output_devices()?
                .nth(index)
                .ok_or_else(|| anyhow!("Selected audio device not available"))
        }
        None => host
            .default_output_device()
            .ok_or_else(|| anyhow!("No default audio output device")),
    }
}

/// Render a tone for the given waveform and play it to completion.
///
/// The buffer is rendered at the device's native sample rate before the
/// stream starts; the audio callback only copies samples out of it.
pub fn play_tone(waveform: Waveform, frequency: f64, terms: usize, tone: &ToneConfig) -> Result<()> {
    let device = open_device(tone.device.as_deref())?;
    let supported = device
        .default_output_config()
        .context("Failed to query output config")?;
    let sample_format = supported.sample_format();
    let config: cpal::StreamConfig = supported.into();
    let sample_rate = config.sample_rate as f64;

    let buffer = render_tone(waveform, frequency, terms, sample_rate, tone.duration, tone.volume);
    debug!(samples = buffer.len(), sample_rate, "rendered tone");

    let (done_tx, done_rx) = bounded(1);

    let _stream = match sample_format {
        cpal::SampleFormat::F32 => start_tone_stream::<f32>(&device, &config, buffer, done_tx)?,
        cpal::SampleFormat::I16 => start_tone_stream::<i16>(&device, &config, buffer, done_tx)?,
        cpal::SampleFormat::U16 => start_tone_stream::<u16>(&device, &config, buffer, done_tx)?,
        other => return Err(anyhow!("Unsupported sample format: {:?}", other)),
    };

    info!(wave = %waveform, frequency, terms, "playing tone");

    let timeout = Duration::from_secs_f64(tone.duration + 1.0);
    if done_rx.recv_timeout(timeout).is_err() {
        warn!("tone playback did not finish within {:?}", timeout);
    }

    Ok(())
}

/// Start an output stream that plays `buffer` once, then outputs silence
fn start_tone_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    buffer: Vec<f32>,
    done_tx: Sender<()>,
) -> Result<cpal::Stream>
where
    T: cpal::Sample + cpal::SizedSample + cpal::FromSample<f32>,
{
    let num_channels = config.channels as usize;
    let mut position = 0usize;
    let mut finished = false;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            for frame in data.chunks_mut(num_channels) {
                let sample = buffer.get(position).copied().unwrap_or(0.0);
                position += 1;

                for out in frame.iter_mut() {
                    *out = T::from_sample(sample);
                }
            }

            if !finished && position >= buffer.len() {
                finished = true;
                let _ = done_tx.try_send(());
            }
        },
        |err| warn!("Audio stream error: {}", err),
        None,
    )?;

    stream.play()?;

    Ok(stream)
}
