use crate::texture::{FilterMode, SegmentTexture, TextureSettings, WrapMode, HEIGHT};

use super::{error::RenderError, ParameterSink, COUNT, POSITIONS};

const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba32Float;

/// A packed word living on the GPU, ready to be bound by an effect
pub struct PositionsTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

/// Uploads every published segment texture to the GPU.
///
/// GPU textures cannot have zero columns, so a word without segments uploads
/// a single transparent column while "Count" stays 0.
pub struct WgpuSink {
    device: wgpu::Device,
    queue: wgpu::Queue,
    positions: Option<PositionsTexture>,
    count: u32,
}

impl WgpuSink {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self {
            device,
            queue,
            positions: None,
            count: 0,
        }
    }

    /// Requests a device without any surface attached
    pub async fn headless() -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;

        // Linear sampling of 32-bit float textures is optional
        let required_features = adapter.features() & wgpu::Features::FLOAT32_FILTERABLE;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("vfx_text device"),
                    required_features,
                    required_limits: wgpu::Limits::downlevel_defaults(),
                },
                None, // Trace path
            )
            .await?;

        Ok(Self::new(device, queue))
    }

    pub fn positions(&self) -> Option<&PositionsTexture> {
        self.positions.as_ref()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    fn filter_mode(&self, filter: FilterMode) -> wgpu::FilterMode {
        match filter {
            FilterMode::Point => wgpu::FilterMode::Nearest,
            FilterMode::Trilinear
                if self
                    .device
                    .features()
                    .contains(wgpu::Features::FLOAT32_FILTERABLE) =>
            {
                wgpu::FilterMode::Linear
            }
            FilterMode::Trilinear => {
                log::warn!("device cannot filter float textures, sampling nearest");
                wgpu::FilterMode::Nearest
            }
        }
    }

    fn upload(
        &self,
        texture: &SegmentTexture,
        settings: TextureSettings,
    ) -> anyhow::Result<PositionsTexture> {
        check_width(texture.width(), self.device.limits().max_texture_dimension_2d)?;

        let placeholder;
        let (width, bytes, bytes_per_row) = if texture.is_empty() {
            log::warn!("uploading placeholder for a word without segments");
            placeholder = [0u8; 2 * 16];
            (1, &placeholder[..], 16)
        } else {
            (texture.width(), texture.as_bytes(), texture.bytes_per_row())
        };

        let size = wgpu::Extent3d {
            width,
            height: HEIGHT,
            depth_or_array_layers: 1,
        };

        let gpu_texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(POSITIONS),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &gpu_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytes,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(bytes_per_row),
                rows_per_image: Some(HEIGHT),
            },
            size,
        );

        let view = gpu_texture.create_view(&wgpu::TextureViewDescriptor::default());

        let filter = self.filter_mode(settings.filter);
        let address_mode = address_mode(settings.wrap);
        let sampler = self.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(POSITIONS),
            address_mode_u: address_mode,
            address_mode_v: address_mode,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: filter,
            min_filter: filter,
            mipmap_filter: filter,
            ..Default::default()
        });

        Ok(PositionsTexture {
            texture: gpu_texture,
            view,
            sampler,
        })
    }
}

/// A word needs one column per segment, which the device may not have room for
fn check_width(width: u32, max: u32) -> Result<(), RenderError> {
    if width > max {
        return Err(RenderError::TooWide { width, max });
    }

    Ok(())
}

fn address_mode(wrap: WrapMode) -> wgpu::AddressMode {
    match wrap {
        WrapMode::Mirror => wgpu::AddressMode::MirrorRepeat,
        WrapMode::Clamp => wgpu::AddressMode::ClampToEdge,
        WrapMode::Repeat => wgpu::AddressMode::Repeat,
    }
}

impl ParameterSink for WgpuSink {
    fn set_texture(
        &mut self,
        name: &str,
        texture: &SegmentTexture,
        settings: TextureSettings,
    ) -> anyhow::Result<()> {
        if name != POSITIONS {
            anyhow::bail!(RenderError::UnknownParameter {
                name: name.to_owned()
            });
        }

        self.positions = Some(self.upload(texture, settings)?);

        Ok(())
    }

    fn set_int(&mut self, name: &str, value: u32) -> anyhow::Result<()> {
        if name != COUNT {
            anyhow::bail!(RenderError::UnknownParameter {
                name: name.to_owned()
            });
        }

        self.count = value;

        Ok(())
    }
}
