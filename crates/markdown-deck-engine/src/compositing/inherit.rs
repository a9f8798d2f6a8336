use crate::models::Page;

/// Fills in headings a page did not set itself from the nearest earlier page.
///
/// A page's own h1 resets the tracked h2/h3 and disables inheritance at every
/// level for that page; its own h2 does the same for h2/h3, its own h3 for h3.
/// A remaining level is inherited only when the page's `default_hN` allows it.
pub fn inherit_headings(pages: &mut [Page]) {
    let mut env: [Option<String>; 3] = [None, None, None];

    for page in pages.iter_mut() {
        let mut inherit = [
            page.option.default_h1,
            page.option.default_h2,
            page.option.default_h3,
        ];

        let own = [page.h1.clone(), page.h2.clone(), page.h3.clone()];
        for (level, heading) in own.into_iter().enumerate() {
            if let Some(heading) = heading {
                env[level] = Some(heading);
                for deeper in &mut env[level + 1..] {
                    *deeper = None;
                }
                for flag in &mut inherit[level..] {
                    *flag = false;
                }
            }
        }

        let slots = [&mut page.h1, &mut page.h2, &mut page.h3];
        for ((slot, inherits), current) in slots.into_iter().zip(inherit).zip(&env) {
            if inherits && slot.is_none() {
                slot.clone_from(current);
            }
        }
    }
}
