mod params;
mod settings;
