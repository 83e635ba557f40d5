//! Canned single-file sites, one per archetype. Each is a complete document
//! with embedded styling and a small script where the archetype calls for
//! one, and each clears structural validation on its own.

pub fn video_platform() -> &'static str {
    r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>StreamLine — Watch Anything</title>
<style>
  * { margin: 0; padding: 0; box-sizing: border-box; }
  body { font-family: 'Segoe UI', Arial, sans-serif; background: #0f0f14; color: #f1f1f1; }
  header { display: flex; align-items: center; gap: 1.5rem; padding: 0.8rem 1.5rem; background: #1b1b24; position: sticky; top: 0; }
  header h1 { font-size: 1.3rem; color: #ff4d6d; }
  header input { flex: 1; max-width: 480px; padding: 0.55rem 1rem; border-radius: 999px; border: 1px solid #333; background: #101018; color: #eee; }
  main { max-width: 1180px; margin: 0 auto; padding: 1.5rem; }
  .player { background: #000; border-radius: 12px; aspect-ratio: 16 / 9; display: flex; align-items: center; justify-content: center; font-size: 3.2rem; cursor: pointer; }
  .meta { padding: 1rem 0.2rem; border-bottom: 1px solid #2a2a35; }
  .meta h2 { font-size: 1.25rem; margin-bottom: 0.35rem; }
  .meta .channel { color: #9aa0b4; font-size: 0.9rem; }
  .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1.1rem; margin-top: 1.4rem; }
  .card { background: #1b1b24; border-radius: 10px; overflow: hidden; cursor: pointer; transition: transform 0.15s ease; }
  .card:hover { transform: translateY(-3px); }
  .thumb { aspect-ratio: 16 / 9; display: flex; align-items: center; justify-content: center; font-size: 2rem; background: linear-gradient(135deg, #343452, #20202e); }
  .card p { padding: 0.7rem 0.8rem 0.2rem; font-size: 0.95rem; }
  .card span { padding: 0 0.8rem 0.9rem; display: block; color: #9aa0b4; font-size: 0.8rem; }
</style>
</head>
<body>
<header>
  <h1>StreamLine</h1>
  <input type="search" placeholder="Search videos, channels, topics" aria-label="Search">
</header>
<main>
  <div class="player" id="player" title="Play">&#9654;</div>
  <div class="meta">
    <h2 id="now-playing">Getting Started with StreamLine</h2>
    <p class="channel">StreamLine Originals &middot; 128K views &middot; 2 days ago</p>
  </div>
  <div class="grid" id="related">
    <div class="card"><div class="thumb">&#127909;</div><p>City Timelapse at Dusk</p><span>Urban Lens &middot; 54K views</span></div>
    <div class="card"><div class="thumb">&#127916;</div><p>Cooking Pasta From Scratch</p><span>Daily Kitchen &middot; 203K views</span></div>
    <div class="card"><div class="thumb">&#127925;</div><p>Lo-fi Beats to Focus To</p><span>Night Radio &middot; 1.2M views</span></div>
    <div class="card"><div class="thumb">&#127958;</div><p>Hiking the Coastal Trail</p><span>Open Roads &middot; 88K views</span></div>
    <div class="card"><div class="thumb">&#128187;</div><p>Build a Website in an Hour</p><span>Code Shop &middot; 310K views</span></div>
    <div class="card"><div class="thumb">&#128247;</div><p>Street Photography Basics</p><span>Frame by Frame &middot; 47K views</span></div>
  </div>
</main>
<script>
  const player = document.getElementById('player');
  const title = document.getElementById('now-playing');
  player.addEventListener('click', () => {
    player.textContent = player.textContent === '▶' ? '⏸' : '▶';
  });
  document.querySelectorAll('.card').forEach(card => {
    card.addEventListener('click', () => {
      title.textContent = card.querySelector('p').textContent;
      window.scrollTo({ top: 0, behavior: 'smooth' });
    });
  });
</script>
</body>
</html>"##
}

pub fn blog() -> &'static str {
    r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>The Quiet Page — A Blog</title>
<style>
  * { margin: 0; padding: 0; box-sizing: border-box; }
  body { font-family: Georgia, 'Times New Roman', serif; background: #faf7f2; color: #2c2a26; line-height: 1.7; }
  header { text-align: center; padding: 3rem 1rem 2rem; border-bottom: 3px double #d8d2c4; }
  header h1 { font-size: 2.4rem; letter-spacing: 0.02em; }
  header p { color: #867f70; font-style: italic; margin-top: 0.4rem; }
  .wrap { max-width: 960px; margin: 0 auto; padding: 2rem 1.2rem; display: grid; grid-template-columns: 2fr 1fr; gap: 2.5rem; }
  article.featured { grid-column: 1 / -1; background: #fff; border: 1px solid #e7e1d4; padding: 2rem; border-radius: 6px; }
  article.featured h2 { font-size: 1.8rem; margin-bottom: 0.5rem; }
  .date { color: #a39a87; font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.08em; }
  .tag { display: inline-block; background: #efe9dc; padding: 0.15rem 0.6rem; border-radius: 999px; font-size: 0.78rem; margin-right: 0.4rem; }
  .posts article { padding: 1.4rem 0; border-bottom: 1px solid #e7e1d4; }
  .posts h3 { font-size: 1.25rem; margin: 0.3rem 0; }
  .posts a { color: #2c2a26; text-decoration: none; }
  .posts a:hover { text-decoration: underline; }
  aside { background: #fff; border: 1px solid #e7e1d4; border-radius: 6px; padding: 1.4rem; height: fit-content; }
  aside h4 { margin-bottom: 0.6rem; font-size: 1.05rem; }
  footer { text-align: center; padding: 2rem; color: #a39a87; font-size: 0.85rem; }
</style>
</head>
<body>
<header>
  <h1>The Quiet Page</h1>
  <p>Notes on food, places, and slow afternoons</p>
</header>
<div class="wrap">
  <article class="featured">
    <p class="date">August 18, 2026</p>
    <h2>A Loaf Worth Waiting For</h2>
    <p><span class="tag">baking</span><span class="tag">weekend</span></p>
    <p>Sourdough rewards patience more than technique. Start the levain the night
    before, fold the dough while the kettle heats, and let the afternoon do the
    rest. The crust tells you everything the timer cannot.</p>
  </article>
  <section class="posts">
    <article>
      <p class="date">August 11, 2026</p>
      <h3><a href="#">Market Day in the Old Quarter</a></h3>
      <p>Tomatoes that smell like tomatoes, and a stall that sells exactly one kind of cheese.</p>
    </article>
    <article>
      <p class="date">August 2, 2026</p>
      <h3><a href="#">Three Soups for Late Summer</a></h3>
      <p>Cold, warm, and the one that works either way.</p>
    </article>
    <article>
      <p class="date">July 25, 2026</p>
      <h3><a href="#">On Keeping a Kitchen Notebook</a></h3>
      <p>Half recipe card, half diary. The stains are part of the record.</p>
    </article>
  </section>
  <aside>
    <h4>About</h4>
    <p>Essays and recipes, published most weeks. Written at a small desk near a
    large window.</p>
    <h4 style="margin-top:1.2rem">Categories</h4>
    <p><span class="tag">baking</span><span class="tag">travel</span><span class="tag">soup</span><span class="tag">notes</span></p>
  </aside>
</div>
<footer>The Quiet Page &middot; all words and crumbs reserved</footer>
</body>
</html>"##
}

pub fn ecommerce() -> &'static str {
    r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Crate &amp; Carry — Shop</title>
<style>
  * { margin: 0; padding: 0; box-sizing: border-box; }
  body { font-family: 'Helvetica Neue', Arial, sans-serif; background: #f6f6f8; color: #1f2430; }
  header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: #fff; box-shadow: 0 1px 4px rgba(0,0,0,0.08); position: sticky; top: 0; }
  header h1 { font-size: 1.35rem; }
  .cart { background: #1f2430; color: #fff; border: none; border-radius: 8px; padding: 0.55rem 1.1rem; cursor: pointer; font-size: 0.95rem; }
  .hero { text-align: center; padding: 3rem 1rem 2rem; }
  .hero h2 { font-size: 2rem; margin-bottom: 0.5rem; }
  .hero p { color: #6b7280; }
  .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(230px, 1fr)); gap: 1.4rem; max-width: 1100px; margin: 0 auto; padding: 1rem 1.5rem 3rem; }
  .product { background: #fff; border-radius: 12px; padding: 1.2rem; box-shadow: 0 1px 3px rgba(0,0,0,0.06); display: flex; flex-direction: column; gap: 0.5rem; }
  .swatch { height: 130px; border-radius: 8px; display: flex; align-items: center; justify-content: center; font-size: 2.4rem; background: #eef0f6; }
  .product h3 { font-size: 1.05rem; }
  .price { font-weight: 700; font-size: 1.1rem; }
  .product button { margin-top: auto; background: #2f6fed; color: #fff; border: none; border-radius: 8px; padding: 0.55rem; cursor: pointer; transition: background 0.15s; }
  .product button:hover { background: #2558c0; }
  .checkout { display: block; margin: 0 auto 3rem; background: #16a34a; color: #fff; border: none; border-radius: 10px; padding: 0.9rem 2.4rem; font-size: 1.05rem; cursor: pointer; }
</style>
</head>
<body>
<header>
  <h1>Crate &amp; Carry</h1>
  <button class="cart" id="cart">Cart (0)</button>
</header>
<section class="hero">
  <h2>Everyday goods, built to last</h2>
  <p>Free shipping on orders over $40. Returns within 30 days, no questions.</p>
</section>
<main class="grid">
  <div class="product"><div class="swatch">&#129525;</div><h3>Canvas Tote</h3><p class="price">$24.00</p><button>Add to cart</button></div>
  <div class="product"><div class="swatch">&#9749;</div><h3>Stoneware Mug</h3><p class="price">$18.00</p><button>Add to cart</button></div>
  <div class="product"><div class="swatch">&#128214;</div><h3>Linen Notebook</h3><p class="price">$12.50</p><button>Add to cart</button></div>
  <div class="product"><div class="swatch">&#128722;</div><h3>Market Basket</h3><p class="price">$36.00</p><button>Add to cart</button></div>
  <div class="product"><div class="swatch">&#128293;</div><h3>Soy Candle</h3><p class="price">$15.00</p><button>Add to cart</button></div>
  <div class="product"><div class="swatch">&#129700;</div><h3>Wool Throw</h3><p class="price">$68.00</p><button>Add to cart</button></div>
</main>
<button class="checkout">Proceed to checkout</button>
<script>
  let count = 0;
  const cart = document.getElementById('cart');
  document.querySelectorAll('.product button').forEach(btn => {
    btn.addEventListener('click', () => {
      count += 1;
      cart.textContent = `Cart (${count})`;
      btn.textContent = 'Added!';
      setTimeout(() => { btn.textContent = 'Add to cart'; }, 900);
    });
  });
</script>
</body>
</html>"##
}

pub fn portfolio() -> &'static str {
    r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Riley Costa — Designer &amp; Developer</title>
<style>
  * { margin: 0; padding: 0; box-sizing: border-box; }
  body { font-family: 'Inter', 'Segoe UI', sans-serif; background: #101418; color: #e8eaed; }
  .hero { min-height: 55vh; display: flex; flex-direction: column; justify-content: center; padding: 0 8vw; background: radial-gradient(circle at 20% 30%, #1d2b3a, #101418 60%); }
  .hero h1 { font-size: 2.8rem; margin-bottom: 0.6rem; }
  .hero p { color: #9aa7b5; max-width: 34rem; font-size: 1.1rem; }
  section { padding: 3.5rem 8vw; }
  h2 { font-size: 1.5rem; margin-bottom: 1.4rem; color: #7cc4ff; }
  .projects { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.3rem; }
  .project { background: #171d24; border: 1px solid #222b35; border-radius: 10px; padding: 1.4rem; transition: border-color 0.15s; }
  .project:hover { border-color: #7cc4ff; }
  .project h3 { margin-bottom: 0.5rem; }
  .project p { color: #9aa7b5; font-size: 0.95rem; }
  .skills { display: flex; flex-wrap: wrap; gap: 0.6rem; }
  .skills li { list-style: none; background: #1d2733; padding: 0.4rem 0.9rem; border-radius: 999px; font-size: 0.9rem; }
  .contact a { color: #7cc4ff; text-decoration: none; font-size: 1.05rem; }
  .contact a:hover { text-decoration: underline; }
  footer { padding: 2rem 8vw; color: #5b6672; font-size: 0.85rem; }
</style>
</head>
<body>
<div class="hero">
  <h1>Riley Costa</h1>
  <p>Designer and front-end developer. I build small, fast, carefully made
  interfaces for teams that care about the details.</p>
</div>
<section>
  <h2>Selected work</h2>
  <div class="projects">
    <div class="project"><h3>Ledgerbird</h3><p>Bookkeeping dashboard for freelancers. Design system, data viz, and the entire front end.</p></div>
    <div class="project"><h3>Fieldnotes</h3><p>Offline-first note app for researchers. Sync engine UI and conflict-resolution flows.</p></div>
    <div class="project"><h3>Transit Atlas</h3><p>Interactive map of regional transit history. WebGL rendering and narrative scrolling.</p></div>
  </div>
</section>
<section>
  <h2>Skills</h2>
  <ul class="skills">
    <li>Interface design</li><li>Design systems</li><li>TypeScript</li><li>CSS architecture</li><li>Accessibility</li><li>Prototyping</li>
  </ul>
</section>
<section class="contact">
  <h2>Contact</h2>
  <p>Currently taking projects for autumn. <a href="mailto:riley@example.com">riley@example.com</a></p>
</section>
<footer>Riley Costa &middot; Lisbon, on most days</footer>
</body>
</html>"##
}

pub fn dashboard() -> &'static str {
    r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Pulseboard — Overview</title>
<style>
  * { margin: 0; padding: 0; box-sizing: border-box; }
  body { font-family: 'Segoe UI', Arial, sans-serif; background: #f1f3f7; color: #1d2433; display: flex; min-height: 100vh; }
  nav { width: 210px; background: #111827; color: #cbd5e1; padding: 1.4rem 0; }
  nav h1 { font-size: 1.15rem; padding: 0 1.4rem 1.2rem; color: #fff; }
  nav a { display: block; padding: 0.65rem 1.4rem; color: inherit; text-decoration: none; font-size: 0.95rem; }
  nav a.active, nav a:hover { background: #1f2937; color: #fff; }
  main { flex: 1; padding: 1.8rem 2.2rem; }
  main h2 { font-size: 1.4rem; margin-bottom: 1.2rem; }
  .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1.1rem; margin-bottom: 1.8rem; }
  .stat { background: #fff; border-radius: 10px; padding: 1.1rem 1.3rem; box-shadow: 0 1px 3px rgba(16,24,39,0.08); }
  .stat span { color: #6b7280; font-size: 0.85rem; }
  .stat strong { display: block; font-size: 1.6rem; margin-top: 0.25rem; }
  .chart { background: #fff; border-radius: 10px; padding: 1.3rem; box-shadow: 0 1px 3px rgba(16,24,39,0.08); margin-bottom: 1.8rem; }
  .bars { display: flex; align-items: flex-end; gap: 0.7rem; height: 140px; margin-top: 1rem; }
  .bars div { flex: 1; background: linear-gradient(180deg, #6366f1, #4f46e5); border-radius: 6px 6px 0 0; }
  table { width: 100%; border-collapse: collapse; background: #fff; border-radius: 10px; overflow: hidden; box-shadow: 0 1px 3px rgba(16,24,39,0.08); }
  th, td { text-align: left; padding: 0.75rem 1.1rem; font-size: 0.92rem; }
  th { background: #f9fafb; color: #6b7280; font-weight: 600; }
  tr + tr td { border-top: 1px solid #eef0f4; }
  .ok { color: #16a34a; } .warn { color: #d97706; }
</style>
</head>
<body>
<nav>
  <h1>Pulseboard</h1>
  <a class="active" href="#">Overview</a>
  <a href="#">Reports</a>
  <a href="#">Customers</a>
  <a href="#">Settings</a>
</nav>
<main>
  <h2>Overview</h2>
  <div class="stats">
    <div class="stat"><span>Active users</span><strong>4,218</strong></div>
    <div class="stat"><span>Signups this week</span><strong>312</strong></div>
    <div class="stat"><span>Revenue (30d)</span><strong>$28.4K</strong></div>
    <div class="stat"><span>Uptime</span><strong>99.97%</strong></div>
  </div>
  <div class="chart">
    <span>Weekly sessions</span>
    <div class="bars">
      <div style="height:45%"></div><div style="height:62%"></div><div style="height:58%"></div>
      <div style="height:74%"></div><div style="height:69%"></div><div style="height:88%"></div><div style="height:80%"></div>
    </div>
  </div>
  <table>
    <thead><tr><th>Event</th><th>Source</th><th>Status</th><th>When</th></tr></thead>
    <tbody>
      <tr><td>Nightly export finished</td><td>scheduler</td><td class="ok">OK</td><td>04:02</td></tr>
      <tr><td>Payment webhook retried</td><td>billing</td><td class="warn">Retry</td><td>03:41</td></tr>
      <tr><td>New workspace created</td><td>signup</td><td class="ok">OK</td><td>02:17</td></tr>
      <tr><td>Index rebuild finished</td><td>search</td><td class="ok">OK</td><td>01:55</td></tr>
    </tbody>
  </table>
</main>
</body>
</html>"##
}

pub fn generic() -> &'static str {
    r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Brightside — Welcome</title>
<style>
  * { margin: 0; padding: 0; box-sizing: border-box; }
  body { font-family: 'Segoe UI', Arial, sans-serif; color: #22272e; background: #ffffff; line-height: 1.6; }
  .hero { text-align: center; padding: 5rem 1.5rem 4rem; background: linear-gradient(160deg, #eef4ff, #fdfdfd); }
  .hero h1 { font-size: 2.6rem; margin-bottom: 0.7rem; }
  .hero p { color: #5b6570; max-width: 36rem; margin: 0 auto 1.6rem; font-size: 1.1rem; }
  .hero a { background: #2f6fed; color: #fff; padding: 0.8rem 1.8rem; border-radius: 10px; text-decoration: none; }
  section { max-width: 1040px; margin: 0 auto; padding: 3rem 1.5rem; }
  h2 { text-align: center; font-size: 1.6rem; margin-bottom: 1.8rem; }
  .features { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.4rem; }
  .feature { background: #f7f9fc; border-radius: 12px; padding: 1.5rem; }
  .feature h3 { margin-bottom: 0.5rem; font-size: 1.1rem; }
  .feature p { color: #5b6570; font-size: 0.95rem; }
  .about { text-align: center; color: #5b6570; max-width: 42rem; }
  footer { background: #111827; color: #9ca3af; text-align: center; padding: 2rem 1rem; font-size: 0.9rem; }
  footer a { color: #d1d5db; }
</style>
</head>
<body>
<div class="hero">
  <h1>Welcome to Brightside</h1>
  <p>A simple, fast starting point for your next idea. Clear sections, clean
  typography, and nothing you will have to rip out later.</p>
  <a href="#features">See what's inside</a>
</div>
<section id="features">
  <h2>What you get</h2>
  <div class="features">
    <div class="feature"><h3>Responsive layout</h3><p>Looks right on a phone, a laptop, and the weird tablet in the kitchen.</p></div>
    <div class="feature"><h3>Readable defaults</h3><p>Sensible spacing and contrast out of the box, with no framework baggage.</p></div>
    <div class="feature"><h3>Easy to extend</h3><p>Plain HTML and CSS you can edit with any tool, or regenerate with a sharper prompt.</p></div>
  </div>
</section>
<section>
  <h2>About</h2>
  <p class="about">This page was produced as a dependable starting point. Replace
  the copy, adjust the palette, and it is yours.</p>
</section>
<footer>
  Brightside &middot; <a href="mailto:hello@example.com">hello@example.com</a>
</footer>
</body>
</html>"##
}
