/// Seed data for one video and its metadata row.
pub struct VideoSeed {
    pub title: String,
    pub director: String,
    pub cast: Vec<String>,
    pub file_url: String,
    pub file_size: i64,
    pub format: String,
    pub resolution: i32,
    /// Seconds
    pub duration: i32,
    pub metadata: MetadataSeed,
}

pub struct MetadataSeed {
    pub synopsis: String,
    pub year_of_release: i32,
    pub genre: String,
    /// Minutes
    pub running_time: i32,
}
