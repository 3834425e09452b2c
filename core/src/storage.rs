use crate::models::PhysicalProfile;
use std::error::Error;
use std::io::ErrorKind;

/// Reads a physical profile from disk (JSON).
/// Unlike records there is no default profile: a missing file is an error.
pub fn load_profile(path: &str) -> Result<PhysicalProfile, Box<dyn Error>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("no profile at {}", path);
            return Err(format!("profile file not found: {path}").into());
        }
        Err(e) => return Err(e.into()),
    };
    let de = &mut serde_json::Deserializer::from_str(&contents);
    let profile: PhysicalProfile = serde_path_to_error::deserialize(de)
        .map_err(|e| format!("{}: {} at {}", path, e.inner(), e.path()))?;
    profile.validate()?;

    log::info!(
        "profile loaded from {} (weight={} kg, height={} m)",
        path, profile.weight_kg, profile.height_m
    );
    Ok(profile)
}

/// Writes a profile to disk as pretty JSON.
pub fn save_profile(profile: &PhysicalProfile, path: &str) -> Result<(), Box<dyn Error>> {
    profile.validate()?;
    let json = serde_json::to_string_pretty(profile)?;
    std::fs::write(path, json)?;
    log::info!("profile saved to {}", path);
    Ok(())
}
