//! Content served when the model's output cannot be turned into a result.

pub const FALLBACK_ANALYSIS: &str = "We're sorry, the physics analysis for this question could not be generated. The model returned a response that could not be read.";

pub const FALLBACK_SOLUTION: &str = "Please try again, or rephrase the question with more detail about the scenario you want to see animated.";

pub const FALLBACK_CONCEPT: &str = "general physics";

/// Generic bouncing-shapes animation shown in place of a broken response.
pub const FALLBACK_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Physics Animation</title>
<style>
  body, html { margin: 0; padding: 0; font-family: 'Arial', sans-serif; background: #f8f9fa; }
  .container { display: flex; flex-direction: column; align-items: center; gap: 16px; padding: 16px; }
  canvas { background: linear-gradient(135deg, #f8f9fa 0%, #e9ecef 100%); border-radius: 16px; box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1); }
  .controls-area { display: flex; gap: 16px; }
  .control-btn { border: none; padding: 12px 20px; border-radius: 12px; color: white; font-weight: 600; cursor: pointer; }
  .play-btn { background: linear-gradient(135deg, #11998e 0%, #38ef7d 100%); }
  .pause-btn { background: linear-gradient(135deg, #ff6b6b 0%, #ffa726 100%); }
  .reset-btn { background: linear-gradient(135deg, #a29bfe 0%, #6c5ce7 100%); }
  .note { color: #555; font-size: 14px; }
</style>
</head>
<body>
<div class="container">
  <canvas id="canvas" width="900" height="450"></canvas>
  <div class="controls-area">
    <button onclick="play()" class="control-btn play-btn">Play</button>
    <button onclick="pause()" class="control-btn pause-btn">Pause</button>
    <button onclick="reset()" class="control-btn reset-btn">Reset</button>
  </div>
  <p class="note">The requested animation could not be generated. Enjoy some bouncing shapes instead.</p>
</div>
<script>
  const canvas = document.getElementById('canvas');
  const ctx = canvas.getContext('2d');
  const g = 0.25;
  let running = true;
  let shapes = [];

  function spawn() {
    shapes = [
      { x: 150, y: 80, vx: 2.2, vy: 0, r: 22, color: '#667eea', kind: 'circle' },
      { x: 420, y: 140, vx: -1.6, vy: 0, r: 28, color: '#FF6B9D', kind: 'square' },
      { x: 700, y: 60, vx: 1.1, vy: 0, r: 18, color: '#38ef7d', kind: 'circle' }
    ];
  }

  function step() {
    for (const s of shapes) {
      s.vy += g;
      s.x += s.vx;
      s.y += s.vy;
      if (s.y + s.r > canvas.height) { s.y = canvas.height - s.r; s.vy *= -0.9; }
      if (s.x - s.r < 0 || s.x + s.r > canvas.width) { s.vx *= -1; }
    }
  }

  function draw() {
    ctx.clearRect(0, 0, canvas.width, canvas.height);
    for (const s of shapes) {
      ctx.fillStyle = s.color;
      if (s.kind === 'circle') {
        ctx.beginPath();
        ctx.arc(s.x, s.y, s.r, 0, 2 * Math.PI);
        ctx.fill();
      } else {
        ctx.fillRect(s.x - s.r, s.y - s.r, s.r * 2, s.r * 2);
      }
    }
  }

  function loop() {
    if (running) { step(); }
    draw();
    requestAnimationFrame(loop);
  }

  function play() { running = true; }
  function pause() { running = false; }
  function reset() { spawn(); draw(); }

  spawn();
  loop();
</script>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_page_is_a_complete_document() {
        assert!(FALLBACK_HTML.starts_with("<!DOCTYPE html>"));
        assert!(FALLBACK_HTML.contains("<head>"));
        assert!(FALLBACK_HTML.trim_end().ends_with("</html>"));
        assert!(FALLBACK_HTML.contains("<canvas"));
    }
}
