use crate::common::*;

pub static CONFIG_VERSION: Lazy<VersionReq> = Lazy::new(|| VersionReq::parse("0.1.0").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(deserialize_with = "deserialize_version")]
    pub version: Version,
    pub image_one: ImageConfig,
    /// Falls back to the first image's settings.
    #[serde(default)]
    pub image_two: Option<ImageConfig>,
    /// The direction string passed to the merge. The user is asked on the
    /// terminal if it is absent.
    #[serde(default)]
    pub direction: Option<String>,
    /// Seed for the random image data. A fresh seed is drawn if absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }

    pub fn image_two(&self) -> &ImageConfig {
        self.image_two.as_ref().unwrap_or(&self.image_one)
    }

    /// Applies command line options on top of the loaded configuration.
    pub fn override_with(
        &mut self,
        direction: Option<String>,
        shape_two: Option<Shape>,
        seed: Option<u64>,
    ) {
        if let Some(direction) = direction {
            self.direction = Some(direction);
        }
        if let Some(shape) = shape_two {
            self.image_two = Some(ImageConfig { shape });
        }
        if let Some(seed) = seed {
            self.seed = Some(seed);
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Version::new(0, 1, 0),
            image_one: ImageConfig::default(),
            image_two: None,
            direction: None,
            seed: None,
        }
    }
}

/// Random image options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    pub shape: Shape,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            shape: Shape::from([3, 100, 100]),
        }
    }
}

/// Parses a comma separated list of dimensions such as `3,50,100`.
pub fn parse_shape(text: &str) -> Result<Shape> {
    let shape: Shape = text
        .split(',')
        .map(|dim| {
            dim.trim()
                .parse::<usize>()
                .with_context(|| format!("'{}' is not a dimension", dim))
        })
        .collect::<Result<_>>()?;

    if shape.is_empty() {
        return Err(format_err!("shape must not be empty"));
    }
    Ok(shape)
}

pub fn deserialize_version<'de, D>(deserializer: D) -> Result<Version, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let version = Version::parse(&text).map_err(|err| {
        D::Error::custom(format!(
            "failed to parse version number '{}': {:?}",
            text, err
        ))
    })?;

    if !CONFIG_VERSION.matches(&version) {
        return Err(D::Error::custom(format!(
            "incompatible version: get '{}', but it is incompatible with requirement '{}'",
            version, &*CONFIG_VERSION,
        )));
    }

    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() -> Result<()> {
        let config: Config = json5::from_str(
            r#"{
                // second image is shorter to provoke a mismatch
                version: "0.1.0",
                image_one: { shape: [3, 100, 100] },
                image_two: { shape: [3, 50, 100] },
                direction: "vertical",
                seed: 42,
            }"#,
        )?;

        assert_eq!(config.image_one.shape, Shape::from([3, 100, 100]));
        assert_eq!(config.image_two().shape, Shape::from([3, 50, 100]));
        assert_eq!(config.direction.as_deref(), Some("vertical"));
        assert_eq!(config.seed, Some(42));
        Ok(())
    }

    #[test]
    fn optional_fields_default() -> Result<()> {
        let config: Config = json5::from_str(
            r#"{ version: "0.1.0", image_one: { shape: [1, 8, 8, 3] } }"#,
        )?;

        assert_eq!(config.image_two(), &config.image_one);
        assert_eq!(config.direction, None);
        assert_eq!(config.seed, None);
        Ok(())
    }

    #[test]
    fn reject_incompatible_version() {
        let result = json5::from_str::<Config>(
            r#"{ version: "0.2.0", image_one: { shape: [3, 100, 100] } }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn override_options() {
        let mut config = Config::default();
        config.override_with(Some("diagonal".into()), Some(Shape::from([3, 50, 100])), None);

        assert_eq!(config.direction.as_deref(), Some("diagonal"));
        assert_eq!(config.image_two().shape, Shape::from([3, 50, 100]));
        assert_eq!(config.image_one.shape, Shape::from([3, 100, 100]));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn parse_shape_list() {
        assert_eq!(parse_shape("3,50,100").unwrap(), Shape::from([3, 50, 100]));
        assert_eq!(parse_shape(" 2, 4 ").unwrap(), Shape::from([2, 4]));
        assert!(parse_shape("3,x,100").is_err());
        assert!(parse_shape("").is_err());
    }
}
