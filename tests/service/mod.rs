mod profile;
mod trends;
