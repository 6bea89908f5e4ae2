use super::prelude::*;

/// Appends an uploaded image to a stall, preserving upload order.
pub fn add_stall_image<R: StallRepo>(repo: &R, stall_id: &str, image_url: &str) -> Result<Stall> {
    let image = image_url.parse::<Url>()?;
    let mut stall = repo.get_stall(stall_id)?;
    stall.add_image(image);
    repo.update_stall(&stall)?;
    Ok(stall)
}
