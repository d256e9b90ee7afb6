/// Installs the document-level input bridges: horizontal swipes click the
/// nav buttons, visibility changes click the hidden auto-play pause/resume
/// targets, and a debounced resize clicks the hidden replay target.
///
/// Installed once per window; the guard keeps hot reloads from stacking
/// listeners.
pub(super) fn gesture_bridge_script() -> String {
    r#"(function() {
                if (window.__pitchBridges) { return; }
                window.__pitchBridges = true;

                const click = (id) => {
                    const btn = document.getElementById(id);
                    if (btn && !btn.disabled) btn.click();
                };

                let startX = 0;
                let startY = 0;
                document.addEventListener("touchstart", (e) => {
                    startX = e.touches[0].clientX;
                    startY = e.touches[0].clientY;
                }, { passive: true });
                document.addEventListener("touchend", (e) => {
                    const dx = e.changedTouches[0].clientX - startX;
                    const dy = e.changedTouches[0].clientY - startY;
                    if (Math.abs(dx) > Math.abs(dy) && Math.abs(dx) > 50) {
                        click(dx > 0 ? "deck-prev" : "deck-next");
                    }
                }, { passive: true });

                document.addEventListener("visibilitychange", () => {
                    click(document.hidden ? "deck-autoplay-pause" : "deck-autoplay-resume");
                });

                let resizeTimer = null;
                window.addEventListener("resize", () => {
                    if (resizeTimer) clearTimeout(resizeTimer);
                    resizeTimer = setTimeout(() => { click("deck-replay"); }, 250);
                });
            })();"#
        .to_string()
}
