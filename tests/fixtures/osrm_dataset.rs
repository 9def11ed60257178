//! Prepares an OSRM dataset for the container tests: downloads a Geofabrik
//! extract once and runs the MLD preprocessing steps through docker.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Download(reqwest::Error),
    Docker(String),
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        DatasetError::Io(err)
    }
}

impl From<reqwest::Error> for DatasetError {
    fn from(err: reqwest::Error) -> Self {
        DatasetError::Download(err)
    }
}

/// Preprocessed files for one Geofabrik region.
#[derive(Debug, Clone)]
pub struct RegionDataset {
    pub data_dir: PathBuf,
    /// Base `.osrm` file, e.g. `nevada-latest.osrm`.
    pub osrm_file: String,
}

impl RegionDataset {
    /// `region` is a Geofabrik path such as `"north-america/us/nevada"`.
    pub fn prepare(region: &str, data_root: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let name = region.rsplit('/').next().unwrap_or(region);
        let data_dir = std::env::current_dir()?.join(data_root).join(name);
        fs::create_dir_all(&data_dir)?;

        let pbf_file = format!("{}-latest.osm.pbf", name);
        let osrm_file = format!("{}-latest.osrm", name);

        let pbf_path = data_dir.join(&pbf_file);
        if !pbf_path.exists() {
            let url = format!("https://download.geofabrik.de/{}-latest.osm.pbf", region);
            let bytes = reqwest::blocking::get(url)?.error_for_status()?.bytes()?;
            let tmp_path = pbf_path.with_extension("tmp");
            fs::File::create(&tmp_path)?.write_all(&bytes)?;
            fs::rename(tmp_path, &pbf_path)?;
        }

        let osrm_path = data_dir.join(&osrm_file);
        if !osrm_path.exists() {
            docker(&data_dir, &["osrm-extract", "-p", "/opt/car.lua", &format!("/data/{}", pbf_file)])?;
        }
        if !osrm_path.with_extension("osrm.partition").exists() {
            docker(&data_dir, &["osrm-partition", &format!("/data/{}", osrm_file)])?;
        }
        if !osrm_path.with_extension("osrm.cells").exists()
            || !osrm_path.with_extension("osrm.mldgr").exists()
        {
            docker(&data_dir, &["osrm-customize", &format!("/data/{}", osrm_file)])?;
        }

        Ok(Self {
            data_dir,
            osrm_file,
        })
    }
}

fn docker(data_dir: &Path, args: &[&str]) -> Result<(), DatasetError> {
    let status = Command::new("docker")
        .args(["run", "--rm", "-t", "-v"])
        .arg(format!("{}:/data", data_dir.display()))
        .arg("osrm/osrm-backend")
        .args(args)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(DatasetError::Docker(format!("{} exited with {}", args[0], status)))
    }
}
